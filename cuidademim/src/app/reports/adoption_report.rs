//! Approved adoptions report

use crate::app::reports::mock_data::{AdoptionRecord, ADOPTIONS};
use crate::app::reports::ReportStrategy;
use crate::domain::entities::{ReportCell, ReportOptions};

pub struct AdoptionReportStrategy;

impl ReportStrategy for AdoptionReportStrategy {
    type Record = AdoptionRecord;

    fn fetch_data(&self, _options: &ReportOptions) -> Vec<AdoptionRecord> {
        ADOPTIONS.to_vec()
    }

    fn format_row(&self, adoption: &AdoptionRecord) -> Vec<ReportCell> {
        vec![
            adoption.id.into(),
            adoption.pet.into(),
            adoption.ngo.into(),
            adoption.adopter.into(),
            adoption.approved_on.into(),
        ]
    }

    fn headers(&self) -> &'static [&'static str] {
        &["ID Adoção", "Nome do Pet", "ONG/Parceiro", "Adotante", "Data Aprovação"]
    }

    fn title(&self) -> &'static str {
        "Relatório de Adoções Aprovadas"
    }
}
