//! Partner performance report

use crate::app::reports::mock_data::{PartnershipRecord, PARTNERSHIPS};
use crate::app::reports::ReportStrategy;
use crate::domain::entities::{ReportCell, ReportOptions};

pub struct PartnershipReportStrategy;

impl ReportStrategy for PartnershipReportStrategy {
    type Record = PartnershipRecord;

    fn fetch_data(&self, _options: &ReportOptions) -> Vec<PartnershipRecord> {
        PARTNERSHIPS.to_vec()
    }

    fn format_row(&self, partner: &PartnershipRecord) -> Vec<ReportCell> {
        vec![
            partner.id.into(),
            partner.name.into(),
            partner.contact.into(),
            partner.status.into(),
            partner.pets_registered.into(),
            partner.adoptions_completed.into(),
        ]
    }

    fn headers(&self) -> &'static [&'static str] {
        &[
            "ID Parceria",
            "Nome da Instituição",
            "Contato",
            "Status",
            "Pets Cadastrados",
            "Adoções Efetivadas",
        ]
    }

    fn title(&self) -> &'static str {
        "Relatório de Desempenho de Parcerias"
    }
}
