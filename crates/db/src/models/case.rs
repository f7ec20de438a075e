use api_types::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, types::Json};
use uuid::Uuid;

/// Case row as stored, media lists in their joined on-disk form.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Case {
    pub id: Uuid,
    pub case_snap: String,
    pub case_desc: String,
    pub case_method: String,
    pub create_user: String,
    pub images: String,
    pub videos: String,
    pub marker: Json<GeoPoint>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written by create and update. The id and timestamps are
/// managed by the queries themselves.
#[derive(Debug, Clone)]
pub struct CaseData {
    pub case_snap: String,
    pub case_desc: String,
    pub case_method: String,
    pub create_user: String,
    pub images: String,
    pub videos: String,
    pub marker: GeoPoint,
}

/// One row of the case/issue join behind the manager dashboard. Issue
/// columns are null for cases with no submission under the project.
#[derive(Debug, Clone, FromRow)]
pub struct CaseIssueJoin {
    pub case_code: Uuid,
    pub case_snap: String,
    pub case_desc: String,
    pub case_images: String,
    pub case_videos: String,
    pub created_at: DateTime<Utc>,
    pub pro_code: Option<String>,
    pub pro_images: Option<String>,
    pub pro_videos: Option<String>,
}

impl Case {
    pub async fn create(pool: &SqlitePool, data: &CaseData) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        sqlx::query_as::<_, Case>(
            r#"INSERT INTO cases (id, case_snap, case_desc, case_method, create_user,
                                  images, videos, marker, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.case_snap)
        .bind(&data.case_desc)
        .bind(&data.case_method)
        .bind(&data.create_user)
        .bind(&data.images)
        .bind(&data.videos)
        .bind(Json(data.marker.clone()))
        .bind(now)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Case>("SELECT * FROM cases WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All cases, newest first. Ties on `created_at` fall back to insertion
    /// order so pagination stays stable. `window` is `(limit, offset)`.
    pub async fn find_all(
        pool: &SqlitePool,
        window: Option<(i64, i64)>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let (limit, offset) = window.unwrap_or((-1, 0));
        sqlx::query_as::<_, Case>(
            "SELECT * FROM cases ORDER BY created_at DESC, rowid DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cases")
            .fetch_one(pool)
            .await
    }

    /// Cases joined with any issue submitted under `pro_code`, one row per
    /// case, paginated on the case side.
    pub async fn find_for_project(
        pool: &SqlitePool,
        pro_code: &str,
        window: Option<(i64, i64)>,
    ) -> Result<Vec<CaseIssueJoin>, sqlx::Error> {
        let (limit, offset) = window.unwrap_or((-1, 0));
        sqlx::query_as::<_, CaseIssueJoin>(
            r#"SELECT c.id AS case_code, c.case_snap, c.case_desc,
                      c.images AS case_images, c.videos AS case_videos, c.created_at,
                      i.pro_code, i.images AS pro_images, i.videos AS pro_videos
               FROM cases c
               LEFT JOIN issues i ON i.case_code = c.id AND i.pro_code = ?1
               ORDER BY c.created_at DESC, c.rowid DESC
               LIMIT ?2 OFFSET ?3"#,
        )
        .bind(pro_code)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Overwrite every data column of one row. The id is only the selector
    /// and is never written. Returns the affected-row count.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &CaseData,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE cases
               SET case_snap = ?1, case_desc = ?2, case_method = ?3, create_user = ?4,
                   images = ?5, videos = ?6, marker = ?7, updated_at = ?8
               WHERE id = ?9"#,
        )
        .bind(&data.case_snap)
        .bind(&data.case_desc)
        .bind(&data.case_method)
        .bind(&data.create_user)
        .bind(&data.images)
        .bind(&data.videos)
        .bind(Json(data.marker.clone()))
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cases WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DBService;

    async fn pool() -> SqlitePool {
        DBService::new("sqlite::memory:")
            .await
            .expect("in-memory database")
            .pool
    }

    fn sample(snap: &str) -> CaseData {
        CaseData {
            case_snap: snap.to_string(),
            case_desc: "broken guardrail".to_string(),
            case_method: "photo".to_string(),
            create_user: "manager-1".to_string(),
            images: "a.jpg,b.jpg".to_string(),
            videos: String::new(),
            marker: GeoPoint::default(),
        }
    }

    #[tokio::test]
    async fn create_then_find_returns_the_row() {
        let pool = pool().await;
        let created = Case::create(&pool, &sample("snap-1")).await.expect("create");
        let found = Case::find_by_id(&pool, created.id)
            .await
            .expect("query")
            .expect("row exists");
        assert_eq!(found.case_snap, "snap-1");
        assert_eq!(found.images, "a.jpg,b.jpg");
        assert_eq!(found.marker.0, GeoPoint::default());
        assert_eq!(found.created_at, found.updated_at);
    }

    #[tokio::test]
    async fn update_keeps_the_id_and_reports_affected_rows() {
        let pool = pool().await;
        let created = Case::create(&pool, &sample("before")).await.expect("create");

        let mut data = sample("after");
        data.images = "c.jpg".to_string();
        let affected = Case::update(&pool, created.id, &data).await.expect("update");
        assert_eq!(affected, 1);

        let found = Case::find_by_id(&pool, created.id)
            .await
            .expect("query")
            .expect("row exists");
        assert_eq!(found.id, created.id);
        assert_eq!(found.case_snap, "after");
        assert_eq!(found.images, "c.jpg");
        assert_eq!(found.created_at, created.created_at);

        let missing = Case::update(&pool, Uuid::new_v4(), &data).await.expect("update");
        assert_eq!(missing, 0);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let pool = pool().await;
        let created = Case::create(&pool, &sample("gone")).await.expect("create");
        assert_eq!(Case::delete(&pool, created.id).await.expect("delete"), 1);
        assert!(
            Case::find_by_id(&pool, created.id)
                .await
                .expect("query")
                .is_none()
        );
        assert_eq!(Case::delete(&pool, created.id).await.expect("delete"), 0);
    }

    #[tokio::test]
    async fn pagination_returns_the_second_page_newest_first() {
        let pool = pool().await;
        for i in 1..=20 {
            Case::create(&pool, &sample(&format!("case-{i:02}")))
                .await
                .expect("create");
        }

        let page = Case::find_all(&pool, Some((10, 10))).await.expect("list");
        let snaps: Vec<_> = page.iter().map(|c| c.case_snap.as_str()).collect();
        let expected: Vec<String> = (1..=10).rev().map(|i| format!("case-{i:02}")).collect();
        assert_eq!(snaps, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(Case::count(&pool).await.expect("count"), 20);
    }

    #[tokio::test]
    async fn unpaginated_list_returns_everything() {
        let pool = pool().await;
        for i in 0..3 {
            Case::create(&pool, &sample(&format!("case-{i}")))
                .await
                .expect("create");
        }
        assert_eq!(Case::find_all(&pool, None).await.expect("list").len(), 3);
    }
}
