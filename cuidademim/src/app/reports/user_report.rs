//! Registered users report

use crate::app::reports::mock_data::{UserRecord, USERS};
use crate::app::reports::ReportStrategy;
use crate::domain::entities::{ReportCell, ReportOptions};

pub struct UserReportStrategy;

impl ReportStrategy for UserReportStrategy {
    type Record = UserRecord;

    fn fetch_data(&self, options: &ReportOptions) -> Vec<UserRecord> {
        USERS
            .iter()
            .filter(|u| match options.user_type {
                Some(ref t) => u.user_type == t.as_str(),
                None => true,
            })
            .copied()
            .collect()
    }

    fn format_row(&self, user: &UserRecord) -> Vec<ReportCell> {
        vec![
            user.id.into(),
            user.name.into(),
            user.email.into(),
            user.user_type.into(),
            user.registered_on.into(),
        ]
    }

    fn headers(&self) -> &'static [&'static str] {
        &["ID", "Nome", "Email", "Tipo", "Data de Cadastro"]
    }

    fn title(&self) -> &'static str {
        "Relatório de Usuários Cadastrados"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reports::Reporter;

    #[test]
    fn filter_by_type() {
        let report = UserReportStrategy.handle_report(&ReportOptions::for_user_type("ong"));

        assert_eq!(report.rows.len(), 3);
        assert!(report
            .rows
            .iter()
            .all(|row| row[3] == ReportCell::Text("ong".to_string())));
    }

    #[test]
    fn filter_with_unknown_type_is_empty() {
        let report = UserReportStrategy.handle_report(&ReportOptions::for_user_type("admin"));
        assert!(report.rows.is_empty());
        assert_eq!(report.headers.len(), 5);
    }

    #[test]
    fn row_columns_in_header_order() {
        let row = UserReportStrategy.format_row(&USERS[0]);
        assert_eq!(
            row,
            vec![
                ReportCell::Integer(1),
                ReportCell::Text("Ana Silva".to_string()),
                ReportCell::Text("ana.silva@email.com".to_string()),
                ReportCell::Text("adotante".to_string()),
                ReportCell::Text("2025-08-01".to_string()),
            ]
        );
    }
}
