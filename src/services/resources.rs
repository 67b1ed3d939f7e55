use crate::domain::constants::OFFICIAL_RESOURCES;
use crate::domain::models::Resource;

pub fn official_resources() -> Vec<Resource> {
    OFFICIAL_RESOURCES
        .iter()
        .map(|(name, url)| Resource {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}
