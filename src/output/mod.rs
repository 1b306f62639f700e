mod format;
mod json;
mod panel;

pub(crate) use json::{output_catalog_json, output_result_json};
pub(crate) use panel::{FOOTER, INTRO, TITLE, render_catalog, render_result};
