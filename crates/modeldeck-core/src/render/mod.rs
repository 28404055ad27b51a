//! Model page rendering
//!
//! Produces one self-contained HTML document per request from a
//! [`ModelListing`]. Markup lives in `assets/page.html` and [`components`];
//! this module decides which panels appear.

pub mod components;
pub mod template;

use std::collections::HashMap;

use crate::ModelId;
use crate::classifier::GroupedModels;
use crate::config::{AppConfig, SiteSettings};
use crate::error::FetchError;
use crate::groups::GroupTable;
use components::PageComponents;
use template::{escape_html, render_template_single_pass};

const PAGE_TEMPLATE: &str = include_str!("../../assets/page.html");

/// Outcome of one upstream fetch, as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelListing {
    Models(Vec<ModelId>),
    Error(String),
}

impl From<Result<Vec<ModelId>, FetchError>> for ModelListing {
    fn from(result: Result<Vec<ModelId>, FetchError>) -> Self {
        match result {
            Ok(models) => Self::Models(models),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

pub struct PageRenderer<'a> {
    site: &'a SiteSettings,
    groups: &'a GroupTable,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self::with_parts(&config.site, &config.groups)
    }

    pub fn with_parts(site: &'a SiteSettings, groups: &'a GroupTable) -> Self {
        Self { site, groups }
    }

    pub fn render(&self, listing: &ModelListing) -> String {
        let (summary, content) = match listing {
            ModelListing::Error(message) => (String::new(), PageComponents::error_panel(message)),
            ModelListing::Models(models) if models.is_empty() => {
                (String::new(), PageComponents::empty_panel())
            }
            ModelListing::Models(models) => self.render_listing(models),
        };

        let site_name = escape_html(&self.site.name);
        let site_icon = escape_html(&self.site.icon);
        let header = PageComponents::header(self.site);
        let replacements = HashMap::from([
            ("{{site_name}}", site_name.as_str()),
            ("{{site_icon}}", site_icon.as_str()),
            ("{{header}}", header.as_str()),
            ("{{summary}}", summary.as_str()),
            ("{{content}}", content.as_str()),
        ]);
        render_template_single_pass(PAGE_TEMPLATE, &replacements)
    }

    fn render_listing(&self, models: &[ModelId]) -> (String, String) {
        let grouped = GroupedModels::from_models(models, self.groups);
        let summary = PageComponents::summary(grouped.len(), grouped.model_count());
        let sections: String = grouped
            .into_sorted()
            .iter()
            .enumerate()
            .map(|(index, group)| PageComponents::group_section(index, group, self.groups))
            .collect();
        let content = format!(
            r#"
            <div id="model-groups" class="space-y-6">{}
            </div>"#,
            sections
        );
        (summary, content)
    }
}
