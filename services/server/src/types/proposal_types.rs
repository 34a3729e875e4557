use serde::Deserialize;
use validator::Validate;

use engine::types::proposal_types::{
    FeeSlab, FundingSources, ProgrammeInfo, ProposalDetails, ProposalInput,
};

#[derive(Deserialize, Debug)]
pub struct ProgrammeBody {
    pub title: String,
    pub theme: String,
    pub venue: String,
    pub coordinator: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FundingBody {
    pub registration_income: i64,
    pub sponsorship_income: i64,
    pub institute_support: i64,
    pub other_income: i64,
}

#[derive(Deserialize, Debug)]
pub struct FeeSlabBody {
    pub category: String,
    pub amount: i64,
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProposalBody {
    pub programme: ProgrammeBody,
    pub funding: FundingBody,
    #[serde(default)]
    pub registration_fees: Vec<FeeSlabBody>,
    #[validate(range(min = 0, message = "Total expenditure cannot be negative"))]
    pub total_expenditure: i64,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl ProposalBody {
    pub fn into_input(self) -> ProposalInput {
        ProposalInput {
            details: ProposalDetails {
                programme: ProgrammeInfo {
                    title: self.programme.title,
                    theme: self.programme.theme,
                    venue: self.programme.venue,
                    coordinator: self.programme.coordinator,
                },
                funding: FundingSources {
                    registration_income: self.funding.registration_income,
                    sponsorship_income: self.funding.sponsorship_income,
                    institute_support: self.funding.institute_support,
                    other_income: self.funding.other_income,
                },
                registration_fees: self
                    .registration_fees
                    .into_iter()
                    .map(|slab| FeeSlab {
                        category: slab.category,
                        amount: slab.amount,
                    })
                    .collect(),
            },
            total_expenditure: self.total_expenditure,
            documents: self.documents,
        }
    }
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApproveBody {
    pub comments: Option<String>,
    #[serde(default)]
    pub next_stages: Vec<String>,
    pub stage_role: Option<String>,
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RejectBody {
    #[validate(length(min = 10, message = "A comment of at least 10 characters is required"))]
    pub comments: String,
    pub stage_role: Option<String>,
}
