/// Parameters resolved for one `init` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub app_name: String,
    pub template: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub description: Option<String>,
}

impl ScaffoldRequest {
    /// Request for a name given on the command line; nothing else is prompted.
    pub fn named(app_name: impl Into<String>) -> Self {
        Self { app_name: app_name.into(), ..Default::default() }
    }

    pub fn with_template(mut self, template: Option<String>) -> Self {
        self.template = template;
        self
    }
}
