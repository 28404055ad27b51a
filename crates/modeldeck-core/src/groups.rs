use serde::Deserialize;

const ICON_BASE: &str = "https://registry.npmmirror.com/@lobehub/icons-static-webp/latest/files/light";

/// Name of the fallback group for identifiers that match no keyword.
pub const DEFAULT_GROUP_NAME: &str = "default";

/// A vendor bucket: name, icon and the keywords that route identifiers into it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupDefinition {
    pub name: String,
    /// Label shown on the page; falls back to `name`.
    #[serde(default)]
    pub display_name: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl GroupDefinition {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            icon: icon.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Case-insensitive substring match. `model_lower` must already be lowercase.
    pub fn matches(&self, model_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| model_lower.contains(&keyword.to_lowercase()))
    }
}

/// Ordered keyword groups plus the keyword-less fallback.
///
/// Order is significant: classification walks `groups` front to back and the
/// first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    groups: Vec<GroupDefinition>,
    default: GroupDefinition,
}

impl GroupTable {
    pub fn new(groups: Vec<GroupDefinition>, default: GroupDefinition) -> Self {
        Self { groups, default }
    }

    /// The vendor table the server ships with.
    pub fn builtin() -> Self {
        let groups = vec![
            vendor("OpenAI", "openai.webp", &["gpt", "dall-e"]),
            vendor("Gemini", "gemini-color.webp", &["gemini", "google", "gemma"]),
            vendor("Claude", "claude-color.webp", &["claude", "anthropic"]),
            vendor("Grok", "grok.webp", &["grok", "xai"]),
            vendor("Qwen", "qwen-color.webp", &["qwen", "tongyi", "wan"]),
            vendor("Zhipu", "zhipu-color.webp", &["zhipu", "thudm", "glm", "zai"]),
            vendor("DeepSeek", "deepseek-color.webp", &["deepseek"]),
            vendor("Kimi", "kimi-color.webp", &["kimi", "moonshot"]),
            vendor("Hunyuan", "hunyuan-color.webp", &["hunyuan", "tencent"])
                .with_display_name("Tencent Hunyuan"),
            vendor("Perplexity", "perplexity-color.webp", &["pplx", "perplexity"]),
            vendor("01.AI", "yi-color.webp", &["yi"]),
            vendor(
                "SiliconFlow",
                "siliconcloud-color.webp",
                &["silicon", "siliconflow", "siliconcloud", "硅基"],
            ),
            vendor("LongCat", "longcat-color.webp", &["longcat", "longcat-ai"]),
            vendor("MiniMax", "minimax-color.webp", &["minimax"]),
        ];
        let default = vendor(DEFAULT_GROUP_NAME, "openai.webp", &[]).with_display_name("Others");
        Self::new(groups, default)
    }

    pub fn groups(&self) -> &[GroupDefinition] {
        &self.groups
    }

    pub fn default_group(&self) -> &GroupDefinition {
        &self.default
    }

    /// Look up a group by name, including the default group.
    pub fn get(&self, name: &str) -> Option<&GroupDefinition> {
        if name == self.default.name {
            return Some(&self.default);
        }
        self.groups.iter().find(|group| group.name == name)
    }

    /// Icon for a group; unknown names get the default group's icon.
    pub fn icon_for(&self, name: &str) -> &str {
        self.get(name).map_or(&self.default.icon, |group| &group.icon)
    }

    pub fn display_name_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).map_or(name, GroupDefinition::display_name)
    }

    pub fn classify(&self, model: &str) -> &str {
        crate::classifier::classify(model, &self.groups, &self.default.name)
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn vendor(name: &str, icon_file: &str, keywords: &[&str]) -> GroupDefinition {
    GroupDefinition::new(name, format!("{}/{}", ICON_BASE, icon_file), keywords)
}
