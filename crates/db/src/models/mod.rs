pub mod case;
pub mod issue;

pub use case::{Case, CaseData, CaseIssueJoin};
pub use issue::{Issue, IssueCaseJoin, IssueData};
