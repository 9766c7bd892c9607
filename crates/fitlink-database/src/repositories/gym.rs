//! Gym repository and the public discovery query.

use std::str::FromStr;

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use fitlink_core::error::AppError;
use fitlink_core::result::AppResult;
use fitlink_core::types::pagination::{PageRequest, PageResponse};
use fitlink_core::types::sorting::SortDirection;
use fitlink_entity::gym::{CreateGym, Gym, GymListing, GymStatus, UpdateGym};

use super::db_err;

/// Mean earth radius used by the haversine distance, in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Column the discovery listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GymSortField {
    #[default]
    Rating,
    Name,
    CreatedAt,
    /// Nearest first; requires an origin.
    Distance,
}

impl GymSortField {
    fn column(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Name => "name",
            Self::CreatedAt => "created_at",
            Self::Distance => "distance_km",
        }
    }
}

impl FromStr for GymSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            "created_at" => Ok(Self::CreatedAt),
            "distance" => Ok(Self::Distance),
            _ => Err(AppError::field("sort_by", "The selected sort by is invalid.")),
        }
    }
}

/// Filters for `GET /v1/gyms`. Every filter narrows the result (AND).
#[derive(Debug, Clone, Default)]
pub struct GymSearch {
    pub city: Option<String>,
    /// Every listed amenity must be present on the gym.
    pub amenities: Vec<String>,
    /// Substring matched against name and description.
    pub search: Option<String>,
    pub sort_by: GymSortField,
    pub sort_order: SortDirection,
    /// `(latitude, longitude)` of the searcher.
    pub origin: Option<(f64, f64)>,
}

impl GymSearch {
    /// Resolved ordering. Distance without an origin falls back to newest
    /// first; distance with one is always nearest first.
    pub fn ordering(&self) -> (GymSortField, SortDirection) {
        match (self.sort_by, self.origin) {
            (GymSortField::Distance, None) => (GymSortField::CreatedAt, SortDirection::Desc),
            (GymSortField::Distance, Some(_)) => (GymSortField::Distance, SortDirection::Asc),
            (field, _) => (field, self.sort_order),
        }
    }

    fn push_filters(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        qb.push(" WHERE status = 'approved' AND is_verified = TRUE");

        if let Some(city) = &self.city {
            qb.push(" AND city = ").push_bind(city.clone());
        }

        for amenity in &self.amenities {
            qb.push(" AND amenities @> ")
                .push_bind(serde_json::json!([amenity]))
                .push("::jsonb");
        }

        if let Some(term) = &self.search {
            let pattern = format!("%{term}%");
            qb.push(" AND (name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }

    fn push_distance(qb: &mut QueryBuilder<'static, Postgres>, lat: f64, lng: f64) {
        qb.push(EARTH_RADIUS_KM.to_string())
            .push(" * acos(LEAST(1.0, GREATEST(-1.0, cos(radians(")
            .push_bind(lat)
            .push(")) * cos(radians(latitude)) * cos(radians(longitude) - radians(")
            .push_bind(lng)
            .push(")) + sin(radians(")
            .push_bind(lat)
            .push(")) * sin(radians(latitude)))))");
    }

    /// Build the page query.
    pub fn select_query(&self, page: &PageRequest) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("SELECT gyms.*, ");
        match self.origin {
            Some((lat, lng)) => Self::push_distance(&mut qb, lat, lng),
            None => {
                qb.push("NULL::DOUBLE PRECISION");
            }
        }
        qb.push(" AS distance_km FROM gyms");
        self.push_filters(&mut qb);

        let (field, direction) = self.ordering();
        qb.push(" ORDER BY ")
            .push(field.column())
            .push(" ")
            .push(direction.as_sql());
        if field == GymSortField::Distance {
            qb.push(" NULLS LAST");
        }
        qb.push(", id ASC");

        qb.push(" LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);
        qb
    }

    /// Build the matching-row count query.
    pub fn count_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM gyms");
        self.push_filters(&mut qb);
        qb
    }
}

/// Repository for gyms.
#[derive(Debug, Clone)]
pub struct GymRepository {
    pool: PgPool,
}

impl GymRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Gym>> {
        sqlx::query_as::<_, Gym>("SELECT * FROM gyms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find gym"))
    }

    /// Find a gym only if it is approved and verified.
    pub async fn find_visible_by_id(&self, id: Uuid) -> AppResult<Option<Gym>> {
        sqlx::query_as::<_, Gym>(
            "SELECT * FROM gyms WHERE id = $1 AND status = 'approved' AND is_verified = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find gym"))
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Gym>> {
        sqlx::query_as::<_, Gym>("SELECT * FROM gyms WHERE owner_id = $1 ORDER BY created_at")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list owner gyms"))
    }

    pub async fn exists_for_owner(&self, owner_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM gyms WHERE owner_id = $1)")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to check gym ownership"))
    }

    /// Public discovery listing.
    pub async fn search(
        &self,
        search: &GymSearch,
        page: &PageRequest,
    ) -> AppResult<PageResponse<GymListing>> {
        let total: i64 = search
            .count_query()
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count gyms"))?;

        let gyms = search
            .select_query(page)
            .build_query_as::<GymListing>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to search gyms"))?;

        Ok(PageResponse::new(gyms, page.page, page.page_size, total as u64))
    }

    /// Insert a gym. New gyms start pending and unverified.
    pub async fn create(&self, data: &CreateGym) -> AppResult<Gym> {
        sqlx::query_as::<_, Gym>(
            "INSERT INTO gyms (owner_id, name, description, email, phone, website, logo, \
                address, city, state, country, postal_code, latitude, longitude, \
                images, amenities, operating_hours) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.website)
        .bind(&data.logo)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.country)
        .bind(&data.postal_code)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(sqlx::types::Json(&data.images))
        .bind(sqlx::types::Json(&data.amenities))
        .bind(&data.operating_hours)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create gym"))
    }

    /// Apply an owner update together with the resulting status.
    pub async fn update(&self, id: Uuid, data: &UpdateGym, status: GymStatus) -> AppResult<Gym> {
        sqlx::query_as::<_, Gym>(
            "UPDATE gyms SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone), \
                website = COALESCE($6, website), \
                logo = COALESCE($7, logo), \
                address = COALESCE($8, address), \
                city = COALESCE($9, city), \
                state = COALESCE($10, state), \
                country = COALESCE($11, country), \
                postal_code = COALESCE($12, postal_code), \
                latitude = COALESCE($13, latitude), \
                longitude = COALESCE($14, longitude), \
                images = COALESCE($15, images), \
                amenities = COALESCE($16, amenities), \
                operating_hours = COALESCE($17, operating_hours), \
                status = $18, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.website)
        .bind(&data.logo)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.country)
        .bind(&data.postal_code)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.images.as_ref().map(sqlx::types::Json))
        .bind(data.amenities.as_ref().map(sqlx::types::Json))
        .bind(&data.operating_hours)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update gym"))
    }

    pub async fn set_status(&self, id: Uuid, status: GymStatus) -> AppResult<Gym> {
        sqlx::query_as::<_, Gym>(
            "UPDATE gyms SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update gym status"))
    }

    /// Set or clear the verification flag.
    pub async fn set_verified(&self, id: Uuid, verified: bool) -> AppResult<Gym> {
        sqlx::query_as::<_, Gym>(
            "UPDATE gyms SET is_verified = $2, \
                verified_at = CASE WHEN $2 THEN NOW() ELSE NULL END, \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(verified)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to update gym verification"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM gyms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete gym"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_filter_always_applies() {
        let sql = GymSearch::default().count_query().sql().to_string();
        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM gyms WHERE status = 'approved' AND is_verified = TRUE"
        );
    }

    #[test]
    fn test_filters_are_bound_not_interpolated() {
        let search = GymSearch {
            city: Some("Asaba".into()),
            amenities: vec!["sauna".into(), "parking".into()],
            search: Some("iron'; DROP TABLE gyms; --".into()),
            ..Default::default()
        };
        let qb = search.select_query(&PageRequest::new(2, 15));
        let sql = qb.sql();

        assert!(sql.contains("AND city = $1"));
        assert!(sql.contains("AND amenities @> $2::jsonb AND amenities @> $3::jsonb"));
        assert!(sql.contains("AND (name ILIKE $4 OR description ILIKE $5)"));
        assert!(sql.contains("ORDER BY rating DESC, id ASC LIMIT $6 OFFSET $7"));
        assert!(!sql.contains("Asaba"));
        assert!(!sql.contains("DROP TABLE"));
        assert!(sql.contains("NULL::DOUBLE PRECISION AS distance_km"));
    }

    #[test]
    fn test_distance_sort_with_origin() {
        let search = GymSearch {
            sort_by: GymSortField::Distance,
            sort_order: SortDirection::Desc,
            origin: Some((6.2, 6.7)),
            ..Default::default()
        };
        let qb = search.select_query(&PageRequest::default());
        let sql = qb.sql();

        assert!(sql.starts_with("SELECT gyms.*, 6371 * acos("));
        assert!(sql.contains("radians($1)"));
        assert!(sql.contains("radians($2)"));
        assert!(sql.contains("ORDER BY distance_km ASC NULLS LAST"));
    }

    #[test]
    fn test_distance_sort_without_origin_falls_back() {
        let search = GymSearch {
            sort_by: GymSortField::Distance,
            sort_order: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(
            search.ordering(),
            (GymSortField::CreatedAt, SortDirection::Desc)
        );
        let qb = search.select_query(&PageRequest::default());
        assert!(qb.sql().contains("ORDER BY created_at DESC"));
    }

    #[test]
    fn test_explicit_sort_order() {
        let search = GymSearch {
            sort_by: GymSortField::Name,
            sort_order: SortDirection::Asc,
            ..Default::default()
        };
        assert!(search.select_query(&PageRequest::default()).sql().contains("ORDER BY name ASC"));
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("distance".parse::<GymSortField>().unwrap(), GymSortField::Distance);
        assert!("price".parse::<GymSortField>().is_err());
    }
}
