//! Constant templates for generated boilerplate files.
//!
//! The MiniJinja context these templates render against is built by
//! [`Config::context`](crate::config::Config::context): package identity,
//! derived URLs, and the pre-formatted classifier/dependency/keyword lists.

use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// Ignore patterns written into every generated git repository.
pub const GITIGNORE: &str = r#"dist
test
*__pycache__
*.ipynb_checkpoints
*.egg-info

.DS_Store
*test.py

*.ipynb
*.docx
*.csv
*.xlsx
*.ai
*.pkl
"#;

const LICENSE: &str = r#"Copyright (C) {{ year }} {{ author }}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

const README: &str = r#"<h1> {{ title }} &nbsp;&nbsp;&nbsp; <a href="{{ pypi_url }}" alt="Version"> <img src="{{ shield_url }}" /></a> </h1>

#### [Source code]({{ github_url }})

<br>

> {{ description }}

<br>

## Install & Use

```text
pip install {{ title }}
```

```py
import {{ title }} as {{ abbrev }}
```

> **Must have Python {{ python_version }} or higher**

---
"#;

const PYPROJECT: &str = r#"[build-system]
# requires: list of packages needed to build my package
requires = ["hatchling"]
# build-backend: name of the python object that frontends use to perform build
build-backend = "hatchling.build"

[project]
name = "{{ title }}"
version = "{{ package_version }}"
requires-python = ">={{ python_version }}"

description = "{{ description }}"

readme = "README.md"
license = { file = "LICENSE" }

authors = [
    { name = "{{ author }}", email = "{{ email }}" },
]

maintainers = [
    { name = "{{ author }}", email = "{{ email }}" },
]

dependencies = [
{% for item in requires %}	"{{ item }}",
{% endfor %}]

classifiers = [
{% for item in classifiers %}	"{{ item }}",
{% endfor %}]

keywords = [
{% for item in keywords %}	"{{ item }}",
{% endfor %}]


[project.urls]
{% for url in urls %}"{{ url[0] }}" = "{{ url[1] }}"
{% endfor %}"#;

/// setup.cfg companion for the legacy metadata format.
pub const SETUP_CFG: &str = r#"[metadata]
description_file=README.md
license_files=LICENSE
"#;

const SETUP_PY: &str = r#"import pathlib
from setuptools import setup, find_packages

HERE = pathlib.Path(__file__).parent

README = (HERE / "README.md").read_text()

setup(
name="{{ title }}",
version="{{ package_version }}",
description="{{ description }}",
long_description=README,
long_description_content_type="text/markdown",
url="{{ github_url }}",
license="{{ license }}",

author="{{ author }}",
author_email="{{ email }}",
packages=find_packages("src"),
package_dir={"": "src"},

classifiers = [
{% for item in classifiers %}	"{{ item }}",
{% endfor %}],

keywords = [
{% for item in keywords %}	"{{ item }}",
{% endfor %}],

install_requires = [
{% for item in requires %}	"{{ item }}",
{% endfor %}],

python_requires = ">={{ python_version }}"
)
"#;

/// Renders the LICENSE file.
pub fn license(renderer: &dyn TemplateRenderer, context: &serde_json::Value) -> Result<String> {
    renderer.render(LICENSE, context)
}

/// Renders the README.md file.
pub fn readme(renderer: &dyn TemplateRenderer, context: &serde_json::Value) -> Result<String> {
    renderer.render(README, context)
}

/// Renders the pyproject.toml metadata file.
pub fn pyproject(renderer: &dyn TemplateRenderer, context: &serde_json::Value) -> Result<String> {
    renderer.render(PYPROJECT, context)
}

/// Renders the setup.py metadata file.
pub fn setup_py(renderer: &dyn TemplateRenderer, context: &serde_json::Value) -> Result<String> {
    renderer.render(SETUP_PY, context)
}
