use crate::shared::api_utils::get_service;
use contracts::domain::a001_title::TitleListItem;
use contracts::shared::ServiceResponse;

pub const MAIN_TITLES_PATH: &str = "/api/admin/collections/main-titles";
pub const ADDON_TITLES_PATH: &str = "/api/admin/collections/addons-titles";

/// Титулы, которые продаются как сам продукт
pub async fn fetch_main_titles() -> ServiceResponse<Vec<TitleListItem>> {
    get_service(MAIN_TITLES_PATH).await
}

pub async fn fetch_addon_titles() -> ServiceResponse<Vec<TitleListItem>> {
    get_service(ADDON_TITLES_PATH).await
}
