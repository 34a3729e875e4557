use serde::{Deserialize, Serialize};
use validator::Validate;

use engine::types::expense_types::{Bill, ExpenseInput};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BillBody {
    pub description: String,
    pub amount: i64,
    pub bill_number: String,
    pub bill_date: String,
    pub vendor: String,
    pub attachment_url: Option<String>,
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBody {
    #[validate(length(min = 1, message = "At least one bill is required"))]
    pub bills: Vec<BillBody>,
    pub event_report_document_url: Option<String>,
    pub notes: Option<String>,
}

impl ExpenseBody {
    pub fn into_input(self) -> ExpenseInput {
        ExpenseInput {
            bills: self
                .bills
                .into_iter()
                .map(|bill| Bill {
                    description: bill.description,
                    amount: bill.amount,
                    bill_number: bill.bill_number,
                    bill_date: bill.bill_date,
                    vendor: bill.vendor,
                    attachment_url: bill.attachment_url,
                })
                .collect(),
            event_report_document_url: self.event_report_document_url,
            notes: self.notes,
        }
    }
}
