use api_types::{GeoPoint, IssueStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, types::Json};
use uuid::Uuid;

/// Issue row as stored, media lists in their joined on-disk form.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub pro_code: String,
    pub case_code: Uuid,
    pub create_user: String,
    pub images: String,
    pub videos: String,
    pub issue_status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written by a submission.
#[derive(Debug, Clone)]
pub struct IssueData {
    pub pro_code: String,
    pub case_code: Uuid,
    pub create_user: String,
    pub images: String,
    pub videos: String,
}

/// A case joined with the issue (if any) for one `(pro_code, case_code)`
/// pair. `None` issue columns mean no submission exists.
#[derive(Debug, Clone, FromRow)]
pub struct IssueCaseJoin {
    pub case_code: Uuid,
    pub case_snap: String,
    pub case_desc: String,
    pub case_method: String,
    pub marker: Json<GeoPoint>,
    pub case_images: String,
    pub case_videos: String,
    pub issue_id: Option<Uuid>,
    pub issue_status: Option<IssueStatus>,
    pub issue_images: Option<String>,
    pub issue_videos: Option<String>,
}

impl Issue {
    /// Insert or overwrite the row keyed on `(pro_code, case_code)` in one
    /// statement. An overwrite replaces the submission fields and resets the
    /// status to unaudited while keeping the existing primary key.
    ///
    /// Returns the stored row and whether a fresh insert happened.
    pub async fn upsert(pool: &SqlitePool, data: &IssueData) -> Result<(Self, bool), sqlx::Error> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let row = sqlx::query_as::<_, Issue>(
            r#"INSERT INTO issues (id, pro_code, case_code, create_user, images, videos,
                                   issue_status, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
               ON CONFLICT (pro_code, case_code) DO UPDATE SET
                   create_user = excluded.create_user,
                   images = excluded.images,
                   videos = excluded.videos,
                   issue_status = excluded.issue_status,
                   updated_at = excluded.updated_at
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.pro_code)
        .bind(data.case_code)
        .bind(&data.create_user)
        .bind(&data.images)
        .bind(&data.videos)
        .bind(IssueStatus::Unaudited)
        .bind(now)
        .fetch_one(pool)
        .await?;
        // An overwrite keeps the conflicting row's id, so the generated id
        // only survives a fresh insert.
        let inserted = row.id == id;
        Ok((row, inserted))
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Issue>("SELECT * FROM issues WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_natural_key(
        pool: &SqlitePool,
        pro_code: &str,
        case_code: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Issue>("SELECT * FROM issues WHERE pro_code = ?1 AND case_code = ?2")
            .bind(pro_code)
            .bind(case_code)
            .fetch_optional(pool)
            .await
    }

    /// Single-statement audit update. Only the status and the row timestamp
    /// change. Returns the affected-row count.
    pub async fn set_status(
        pool: &SqlitePool,
        id: Uuid,
        status: IssueStatus,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE issues SET issue_status = ?1, updated_at = ?2 WHERE id = ?3")
                .bind(status)
                .bind(Utc::now())
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Composite read from the case side in one statement, so the case and
    /// issue halves always come from the same snapshot. `None` means the
    /// case itself is gone, including when a dangling issue still points at
    /// it.
    pub async fn find_detail(
        pool: &SqlitePool,
        pro_code: &str,
        case_code: Uuid,
    ) -> Result<Option<IssueCaseJoin>, sqlx::Error> {
        sqlx::query_as::<_, IssueCaseJoin>(
            r#"SELECT c.id AS case_code, c.case_snap, c.case_desc, c.case_method, c.marker,
                      c.images AS case_images, c.videos AS case_videos,
                      i.id AS issue_id, i.issue_status,
                      i.images AS issue_images, i.videos AS issue_videos
               FROM cases c
               LEFT JOIN issues i ON i.case_code = c.id AND i.pro_code = ?1
               WHERE c.id = ?2"#,
        )
        .bind(pro_code)
        .bind(case_code)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM issues WHERE id = ?1")
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
    use crate::models::case::{Case, CaseData};

    async fn pool() -> SqlitePool {
        DBService::new("sqlite::memory:")
            .await
            .expect("in-memory database")
            .pool
    }

    async fn seed_case(pool: &SqlitePool, snap: &str) -> Case {
        Case::create(
            pool,
            &CaseData {
                case_snap: snap.to_string(),
                case_desc: "pothole".to_string(),
                case_method: "photo".to_string(),
                create_user: "manager-1".to_string(),
                images: "ref.jpg".to_string(),
                videos: String::new(),
                marker: GeoPoint::default(),
            },
        )
        .await
        .expect("seed case")
    }

    fn submission(pro: &str, case_code: Uuid, images: &str) -> IssueData {
        IssueData {
            pro_code: pro.to_string(),
            case_code,
            create_user: "worker-7".to_string(),
            images: images.to_string(),
            videos: String::new(),
        }
    }

    #[tokio::test]
    async fn upsert_overwrites_in_place_on_the_natural_key() {
        let pool = pool().await;
        let case = seed_case(&pool, "snap").await;

        let (first, inserted) = Issue::upsert(&pool, &submission("p-1", case.id, "one.jpg"))
            .await
            .expect("insert");
        assert!(inserted);
        assert_eq!(first.issue_status, IssueStatus::Unaudited);

        Issue::set_status(&pool, first.id, IssueStatus::Approved)
            .await
            .expect("audit");

        let (second, inserted) = Issue::upsert(&pool, &submission("p-1", case.id, "two.jpg"))
            .await
            .expect("overwrite");
        assert!(!inserted);
        assert_eq!(second.id, first.id);
        assert_eq!(second.images, "two.jpg");
        // A resubmission goes back through audit.
        assert_eq!(second.issue_status, IssueStatus::Unaudited);
        assert_eq!(second.created_at, first.created_at);

        // A different project is a separate row.
        let (other, inserted) = Issue::upsert(&pool, &submission("p-2", case.id, "three.jpg"))
            .await
            .expect("insert for other project");
        assert!(inserted);
        assert_ne!(other.id, first.id);
    }

    #[tokio::test]
    async fn set_status_changes_only_the_status() {
        let pool = pool().await;
        let case = seed_case(&pool, "snap").await;
        let (issue, _) = Issue::upsert(&pool, &submission("p-1", case.id, "one.jpg"))
            .await
            .expect("insert");

        let affected = Issue::set_status(&pool, issue.id, IssueStatus::Rejected)
            .await
            .expect("audit");
        assert_eq!(affected, 1);

        let after = Issue::find_by_id(&pool, issue.id)
            .await
            .expect("query")
            .expect("row exists");
        assert_eq!(after.issue_status, IssueStatus::Rejected);
        assert_eq!(after.images, issue.images);
        assert_eq!(after.pro_code, issue.pro_code);
        assert_eq!(after.create_user, issue.create_user);
        assert_eq!(after.created_at, issue.created_at);

        let missing = Issue::set_status(&pool, Uuid::new_v4(), IssueStatus::Approved)
            .await
            .expect("audit unknown id");
        assert_eq!(missing, 0);
    }

    #[tokio::test]
    async fn find_detail_returns_null_issue_columns_without_a_submission() {
        let pool = pool().await;
        let case = seed_case(&pool, "snap").await;

        let row = Issue::find_detail(&pool, "p-1", case.id)
            .await
            .expect("query")
            .expect("case exists");
        assert_eq!(row.case_code, case.id);
        assert_eq!(row.case_images, "ref.jpg");
        assert!(row.issue_id.is_none());
        assert!(row.issue_status.is_none());
        assert!(row.issue_images.is_none());
    }

    #[tokio::test]
    async fn find_detail_misses_when_the_case_is_gone() {
        let pool = pool().await;
        let case = seed_case(&pool, "snap").await;
        Issue::upsert(&pool, &submission("p-1", case.id, "one.jpg"))
            .await
            .expect("insert");
        Case::delete(&pool, case.id).await.expect("delete case");

        // The issue now dangles; the composite read reports a miss instead
        // of exposing a half-populated view.
        let row = Issue::find_detail(&pool, "p-1", case.id).await.expect("query");
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn project_join_pairs_cases_with_their_issues() {
        let pool = pool().await;
        let with_issue = seed_case(&pool, "matched").await;
        let without_issue = seed_case(&pool, "unmatched").await;
        Issue::upsert(&pool, &submission("p-1", with_issue.id, "a.jpg,b.jpg"))
            .await
            .expect("insert");
        // An issue under another project must not leak into the join.
        Issue::upsert(&pool, &submission("p-2", without_issue.id, "c.jpg"))
            .await
            .expect("insert");

        let rows = Case::find_for_project(&pool, "p-1", None)
            .await
            .expect("join");
        assert_eq!(rows.len(), 2);

        let matched = rows
            .iter()
            .find(|r| r.case_code == with_issue.id)
            .expect("matched row");
        assert_eq!(matched.pro_code.as_deref(), Some("p-1"));
        assert_eq!(matched.pro_images.as_deref(), Some("a.jpg,b.jpg"));

        let unmatched = rows
            .iter()
            .find(|r| r.case_code == without_issue.id)
            .expect("unmatched row");
        assert!(unmatched.pro_code.is_none());
        assert!(unmatched.pro_images.is_none());
    }
}
