use chrono::Datelike;
use pystamp::cli::Args;
use pystamp::config::Config;
use pystamp::layout::Layout;
use pystamp::metadata::{render_metadata, MetaFormat};
use pystamp::renderer::MiniJinjaRenderer;
use pystamp::templates;

fn context() -> serde_json::Value {
    let args = Args {
        title: "widgets".to_string(),
        abbrev: None,
        name: Some("Jane Doe".to_string()),
        github: Some("jane".to_string()),
        pypi: Some("jane".to_string()),
        email: Some("jane@example.com".to_string()),
        desc: Some("Tiny widgets for big plans".to_string()),
        python_version: None,
        requires: Some("pandas, numpy".to_string()),
        keywords: Some("widgets, tools".to_string()),
        force: false,
        no_git: false,
        no_license: false,
        no_readme: false,
        meta: MetaFormat::Pyproject,
        layout: Layout::SrcUtil,
        verbose: false,
    };
    Config::from_args(args).unwrap().context().unwrap()
}

#[test]
fn test_readme_contains_identity() {
    let renderer = MiniJinjaRenderer::new();
    let readme = templates::readme(&renderer, &context()).unwrap();

    assert!(readme.contains("<h1> widgets"));
    assert!(readme.contains("pip install widgets"));
    assert!(readme.contains("import widgets as wi"));
    assert!(readme.contains("> Tiny widgets for big plans"));
    assert!(readme.contains("https://github.com/jane/widgets"));
    assert!(readme.contains("https://img.shields.io/pypi/v/widgets.svg"));
}

#[test]
fn test_license_contains_year_and_author() {
    let renderer = MiniJinjaRenderer::new();
    let license = templates::license(&renderer, &context()).unwrap();

    let year = chrono::Utc::now().year();
    assert!(license.starts_with(&format!("Copyright (C) {} Jane Doe", year)));
    assert!(license.contains("Permission is hereby granted, free of charge"));
}

#[test]
fn test_pyproject_renders_lists() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = render_metadata(MetaFormat::Pyproject, &renderer, &context()).unwrap();

    assert_eq!(rendered.len(), 1);
    let (name, pyproject) = &rendered[0];
    assert_eq!(*name, "pyproject.toml");

    assert!(pyproject.contains("name = \"widgets\""));
    assert!(pyproject.contains("version = \"0.0.0\""));
    assert!(pyproject.contains("requires-python = \">=3.12\""));
    assert!(pyproject.contains("build-backend = \"hatchling.build\""));
    assert!(pyproject.contains("\t\"pandas\",\n\t\"numpy\",\n"));
    assert!(pyproject.contains("\t\"License :: OSI Approved :: MIT License\","));
    assert!(pyproject.contains("\t\"widgets\",\n\t\"tools\",\n"));
    assert!(pyproject.contains("\"Source Code\" = \"https://github.com/jane/widgets\""));
    assert!(pyproject.contains("{ name = \"Jane Doe\", email = \"jane@example.com\" }"));
}

#[test]
fn test_setup_format_renders_both_files() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = render_metadata(MetaFormat::Setup, &renderer, &context()).unwrap();

    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].0, "setup.cfg");
    assert_eq!(rendered[1].0, "setup.py");

    assert!(rendered[0].1.contains("description_file=README.md"));

    let setup_py = &rendered[1].1;
    assert!(setup_py.contains("name=\"widgets\""));
    assert!(setup_py.contains("packages=find_packages(\"src\")"));
    assert!(setup_py.contains("\t\"pandas\",\n\t\"numpy\",\n"));
    assert!(setup_py.contains("python_requires = \">=3.12\""));
}

#[test]
fn test_gitignore_is_static() {
    assert!(templates::GITIGNORE.contains("*__pycache__"));
    assert!(templates::GITIGNORE.contains(".DS_Store"));
}
