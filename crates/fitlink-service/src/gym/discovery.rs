//! Public gym listing and detail reads.

use std::sync::Arc;

use uuid::Uuid;

use fitlink_core::config::DiscoveryConfig;
use fitlink_core::error::AppError;
use fitlink_core::types::{PageRequest, PageResponse, SortDirection};
use fitlink_database::repositories::{
    GymRepository, GymSearch, GymSortField, InstructorRepository,
};
use fitlink_entity::gym::{Gym, GymListing};
use fitlink_entity::instructor::Instructor;

/// Raw query-string parameters of `GET /v1/gyms`.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryQuery {
    pub city: Option<String>,
    /// Comma-separated amenity names.
    pub amenities: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl DiscoveryQuery {
    /// Parse into repository filters and a bounded page.
    pub fn parse(self, config: &DiscoveryConfig) -> Result<(GymSearch, PageRequest), AppError> {
        let sort_by = match non_blank(self.sort_by) {
            Some(raw) => raw.parse::<GymSortField>()?,
            None => GymSortField::default(),
        };
        let sort_order = match non_blank(self.sort_order) {
            Some(raw) => raw.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        let origin = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(AppError::field(
                        "latitude",
                        "The latitude must be between -90 and 90.",
                    ));
                }
                if !(-180.0..=180.0).contains(&lng) {
                    return Err(AppError::field(
                        "longitude",
                        "The longitude must be between -180 and 180.",
                    ));
                }
                Some((lat, lng))
            }
            _ => None,
        };

        let amenities = self
            .amenities
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        let search = GymSearch {
            city: non_blank(self.city),
            amenities,
            search: non_blank(self.search),
            sort_by,
            sort_order,
            origin,
        };
        let page = PageRequest::bounded(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(config.default_page_size),
            config.max_page_size,
        );

        Ok((search, page))
    }
}

/// Reads over gyms that are approved and verified. Nothing else is public.
#[derive(Debug, Clone)]
pub struct DiscoveryService {
    gym_repo: Arc<GymRepository>,
    instructor_repo: Arc<InstructorRepository>,
    config: DiscoveryConfig,
}

impl DiscoveryService {
    pub fn new(
        gym_repo: Arc<GymRepository>,
        instructor_repo: Arc<InstructorRepository>,
        config: DiscoveryConfig,
    ) -> Self {
        Self {
            gym_repo,
            instructor_repo,
            config,
        }
    }

    pub async fn search(&self, query: DiscoveryQuery) -> Result<PageResponse<GymListing>, AppError> {
        let (search, page) = query.parse(&self.config)?;
        self.gym_repo.search(&search, &page).await
    }

    pub async fn show(&self, gym_id: Uuid) -> Result<Gym, AppError> {
        self.gym_repo
            .find_visible_by_id(gym_id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym not found"))
    }

    /// Active, available instructors of a visible gym, best rated first.
    pub async fn instructors(&self, gym_id: Uuid) -> Result<Vec<Instructor>, AppError> {
        let gym = self.show(gym_id).await?;
        self.instructor_repo.list_bookable_by_gym(gym.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DiscoveryConfig {
        DiscoveryConfig::default()
    }

    #[test]
    fn test_defaults() {
        let (search, page) = DiscoveryQuery::default().parse(&config()).unwrap();
        assert_eq!(search.sort_by, GymSortField::Rating);
        assert_eq!(search.sort_order, SortDirection::Desc);
        assert!(search.amenities.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 15);
    }

    #[test]
    fn test_amenities_are_split_and_trimmed() {
        let query = DiscoveryQuery {
            amenities: Some("sauna, pool,,parking ".into()),
            ..Default::default()
        };
        let (search, _) = query.parse(&config()).unwrap();
        assert_eq!(search.amenities, vec!["sauna", "pool", "parking"]);
    }

    #[test]
    fn test_page_size_is_capped() {
        let query = DiscoveryQuery {
            per_page: Some(500),
            page: Some(0),
            ..Default::default()
        };
        let (_, page) = query.parse(&config()).unwrap();
        assert_eq!(page.page_size, 100);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_origin_requires_both_coordinates() {
        let only_lat = DiscoveryQuery {
            latitude: Some(6.2),
            sort_by: Some("distance".into()),
            ..Default::default()
        };
        let (search, _) = only_lat.parse(&config()).unwrap();
        assert!(search.origin.is_none());

        let both = DiscoveryQuery {
            latitude: Some(6.2),
            longitude: Some(6.7),
            ..Default::default()
        };
        assert_eq!(both.parse(&config()).unwrap().0.origin, Some((6.2, 6.7)));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let query = DiscoveryQuery {
            latitude: Some(91.0),
            longitude: Some(0.0),
            ..Default::default()
        };
        assert!(query.parse(&config()).is_err());
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let query = DiscoveryQuery {
            sort_by: Some("popularity".into()),
            ..Default::default()
        };
        assert!(query.parse(&config()).is_err());
    }
}
