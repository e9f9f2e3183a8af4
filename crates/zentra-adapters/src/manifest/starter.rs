//! Manifest written by `zentra init`.

pub const STARTER_MANIFEST: &str = r#"# Zentra models
#
# Every page listed in `register` is generated into zentra/generated/pages.
# Run `zentra generate` after editing this file.

[app]
name = "my-app"
register = ["Landing"]

[[pages]]
name = "Landing"

[[pages.blocks]]
name = "Hero"

[[pages.blocks.components]]
type = "Alert"
title = "Welcome"
description = "Your first page was generated by Zentra."
icon = "rocket"

[[pages.blocks.components]]
type = "Button"
text = "Read the docs"
url = "https://zentra.achronus.dev"

[[pages.blocks]]
name = "Signup"

[[pages.blocks.components]]
type = "Input"
id = "email"
input_type = "email"
placeholder = "Email"

[[pages.blocks.components]]
type = "Checkbox"
id = "terms"
label = "Accept terms and conditions"
"#;
