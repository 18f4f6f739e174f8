use crate::shared::api_utils::get_service;
use contracts::domain::a001_title::TitleListItem;
use contracts::shared::ServiceResponse;

pub const ADDONS_TITLES_PATH: &str = "/api/admin/collections/addons-titles";

pub async fn fetch_addons_titles() -> ServiceResponse<Vec<TitleListItem>> {
    get_service(ADDONS_TITLES_PATH).await
}
