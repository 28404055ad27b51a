//! HTML fragments that make up the model page

use super::template::{escape_html, js_string_attr};
use crate::classifier::ModelGroup;
use crate::config::SiteSettings;
use crate::groups::GroupTable;

const CARD_ICON_FALLBACK: &str = "https://via.placeholder.com/32x32/f0f0f0/999999?text=AI";
const GROUP_ICON_FALLBACK: &str = "https://via.placeholder.com/48x48/f0f0f0/999999?text=AI";

pub struct PageComponents;

impl PageComponents {
    /// Site logo and title.
    pub fn header(site: &SiteSettings) -> String {
        format!(
            r#"
            <div class="text-center mb-10">
                <div class="mb-6 inline-block">
                    <div class="w-20 h-20 rounded-2xl bg-gradient-to-br from-blue-500 to-purple-600 p-1 shadow-xl">
                        <img src="{logo}" alt="{name}" class="w-full h-full rounded-xl object-cover bg-white">
                    </div>
                </div>
                <h1 class="text-5xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                    {name}
                </h1>
            </div>"#,
            logo = escape_html(&site.logo),
            name = escape_html(&site.name),
        )
    }

    /// Group and model totals shown above the listing.
    pub fn summary(group_count: usize, model_count: usize) -> String {
        format!(
            r#"
            <div id="summary" class="glass-effect rounded-2xl p-4 mb-8 inline-block mx-auto block text-center shadow-lg">
                <div class="flex items-center justify-center space-x-6 text-sm">
                    <div class="flex items-center space-x-2">
                        <i class="fas fa-layer-group text-blue-600"></i>
                        <span class="text-gray-700">{}</span>
                    </div>
                    <div class="w-px h-4 bg-gray-300"></div>
                    <div class="flex items-center space-x-2">
                        <i class="fas fa-microchip text-purple-600"></i>
                        <span class="text-gray-700">{}</span>
                    </div>
                </div>
            </div>"#,
            counted(group_count, "group"),
            counted(model_count, "model"),
        )
    }

    pub fn error_panel(message: &str) -> String {
        format!(
            r#"
            <div id="error-panel" class="bg-white rounded-2xl p-8 text-center max-w-2xl mx-auto mb-8 shadow-lg border border-red-100">
                <div class="w-16 h-16 bg-red-100 rounded-full flex items-center justify-center mx-auto mb-4">
                    <i class="fas fa-exclamation-triangle text-red-600 text-2xl"></i>
                </div>
                <h3 class="text-xl font-semibold text-gray-900 mb-2">Connection error</h3>
                <p class="text-gray-600">{}</p>
            </div>"#,
            escape_html(message)
        )
    }

    pub fn empty_panel() -> String {
        r#"
            <div id="empty-panel" class="bg-white rounded-2xl p-12 text-center max-w-2xl mx-auto shadow-lg">
                <div class="w-20 h-20 bg-gray-100 rounded-full flex items-center justify-center mx-auto mb-6">
                    <i class="fas fa-robot text-gray-400 text-3xl"></i>
                </div>
                <h3 class="text-xl font-semibold text-gray-900 mb-2">No models available</h3>
                <p class="text-gray-500">Check the API configuration or try again later</p>
            </div>"#
            .to_string()
    }

    /// Collapsible section for one group. `index` keys the toggle targets.
    pub fn group_section(index: usize, group: &ModelGroup, table: &GroupTable) -> String {
        let icon = escape_html(table.icon_for(&group.name));
        let display_name = escape_html(table.display_name_for(&group.name));
        let cards: String = group
            .models
            .iter()
            .map(|model| Self::model_card(model, &icon, &display_name))
            .collect();

        format!(
            r#"
                <div class="model-group bg-white rounded-2xl shadow-sm border border-gray-200 overflow-hidden" data-group="{display_name}">
                    <div class="p-5 cursor-pointer hover:bg-gray-50 transition-colors" onclick="toggleGroup({index})">
                        <div class="flex items-center justify-between">
                            <div class="flex items-center space-x-4">
                                <div class="relative">
                                    <img src="{icon}" alt="{display_name}"
                                         class="w-12 h-12 rounded-xl object-cover bg-gray-50 border border-gray-200 shadow-sm"
                                         onerror="this.src='{GROUP_ICON_FALLBACK}'">
                                </div>
                                <div>
                                    <h3 class="text-lg font-semibold text-gray-900">{display_name}</h3>
                                    <p class="text-sm text-gray-500">{count}</p>
                                </div>
                            </div>
                            <div class="text-gray-400">
                                <i id="icon-{index}" class="fas fa-chevron-down transition-transform duration-200"></i>
                            </div>
                        </div>
                    </div>
                    <div id="content-{index}" class="border-t border-gray-100">
                        <div class="p-5">
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-3">{cards}
                            </div>
                        </div>
                    </div>
                </div>"#,
            count = counted(group.models.len(), "model"),
        )
    }

    /// Card for one model. `icon` and `group_label` arrive already escaped.
    fn model_card(model: &str, icon: &str, group_label: &str) -> String {
        format!(
            r#"
                                <div class="model-card group relative bg-white rounded-xl p-4 border border-gray-200 hover:border-blue-300 hover:shadow-lg transition-all duration-200 cursor-pointer"
                                     onclick="copyToClipboard({handler_arg})">
                                    <div class="flex items-start space-x-3">
                                        <div class="flex-shrink-0">
                                            <img src="{icon}" alt="{group_label}"
                                                 class="w-8 h-8 rounded-lg object-cover bg-gray-50 border border-gray-200"
                                                 onerror="this.src='{CARD_ICON_FALLBACK}'">
                                        </div>
                                        <div class="flex-1 min-w-0">
                                            <div class="font-medium text-gray-900 text-sm leading-tight break-all">{text}</div>
                                        </div>
                                    </div>
                                    <div class="absolute top-2 right-2 opacity-0 group-hover:opacity-100 transition-opacity">
                                        <i class="fas fa-copy text-gray-400 text-xs"></i>
                                    </div>
                                </div>"#,
            handler_arg = js_string_attr(model),
            text = escape_html(model),
        )
    }
}

fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_pluralizes() {
        assert_eq!(counted(0, "model"), "0 models");
        assert_eq!(counted(1, "group"), "1 group");
        assert_eq!(counted(12, "model"), "12 models");
    }

    #[test]
    fn test_model_card_escapes_identifier() {
        let card = PageComponents::model_card(r#"evil"><script>x('1')</script>"#, "i.png", "Others");
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
        assert!(card.contains(r#"onclick="copyToClipboard(&quot;evil\&quot;&gt;&lt;script&gt;x(&#x27;1&#x27;)&lt;/script&gt;&quot;)""#));
    }

    #[test]
    fn test_group_section_uses_display_name_and_icon() {
        let table = GroupTable::builtin();
        let group = ModelGroup {
            name: "default".to_string(),
            models: vec!["mystery-1".to_string(), "mystery-2".to_string()],
        };
        let html = PageComponents::group_section(3, &group, &table);
        assert!(html.contains(r#"onclick="toggleGroup(3)""#));
        assert!(html.contains(r#"id="content-3""#));
        assert!(html.contains(r#"id="icon-3""#));
        assert!(html.contains(">Others</h3>"));
        assert!(html.contains("2 models"));
        assert!(html.contains(&table.default_group().icon));
        assert_eq!(html.matches("model-card").count(), 2);
    }

    #[test]
    fn test_error_panel_escapes_message() {
        let html = PageComponents::error_panel("bad <gateway>");
        assert!(html.contains("bad &lt;gateway&gt;"));
    }
}
