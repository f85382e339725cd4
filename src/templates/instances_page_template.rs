use askama::Template;
use crate::handlers::helpers::FlashMessage;
use crate::render::TableView;

#[derive(Template)]
#[template(path = "instances.html")]
pub struct InstancesPageTemplate<'a> {
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<FlashMessage>,
    pub has_flash_messages: bool,
    pub table: &'a TableView,
    pub load_failed: bool,
}

crate::impl_base_template!(InstancesPageTemplate<'_>);
