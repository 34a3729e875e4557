use criterion::{criterion_group, criterion_main, Criterion};

use engine::store::approvals::{spawn_approvals_actor, Approvals};
use engine::types::approval_types::{ApproverRole, Reviewer};
use engine::types::proposal_types::{
    FeeSlab, FundingSources, ProgrammeInfo, ProposalDetails, ProposalInput,
};
use engine::types::series_types::OccurrenceInput;

fn reviewer(sub_role: &str) -> Reviewer {
    Reviewer {
        staff_id: 1,
        role: "Admin".to_string(),
        sub_role: Some(sub_role.to_string()),
        max_approval_amount: None,
    }
}

fn proposal_input() -> ProposalInput {
    ProposalInput {
        details: ProposalDetails {
            programme: ProgrammeInfo {
                title: "Bench Fest".to_string(),
                theme: "Throughput".to_string(),
                venue: "Hall".to_string(),
                coordinator: "Bench".to_string(),
            },
            funding: FundingSources {
                registration_income: 10_000,
                sponsorship_income: 10_000,
                institute_support: 10_000,
                other_income: 0,
            },
            registration_fees: vec![FeeSlab {
                category: "External".to_string(),
                amount: 200,
            }],
        },
        total_expenditure: 25_000,
        documents: Vec::new(),
    }
}

async fn run_full_chain(approvals: &Approvals, series_id: u64) {
    let occurrence = approvals
        .create_occurrence(
            series_id,
            OccurrenceInput {
                title: "occurrence".to_string(),
                scheduled_start_date: "2025-01-01".to_string(),
                scheduled_end_date: "2025-01-02".to_string(),
            },
        )
        .await
        .unwrap();

    approvals
        .create_proposal(occurrence.id, proposal_input())
        .await
        .unwrap();
    approvals.submit_proposal(occurrence.id).await.unwrap();
    approvals
        .approve_proposal(
            occurrence.id,
            reviewer("President"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence.id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence.id,
            reviewer("Joint Registrar SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence.id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
}

fn bench_full_approval_chain(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime");

    let (approvals, series_id) = runtime.block_on(async {
        let approvals = spawn_approvals_actor();
        let series = approvals
            .create_series("bench".to_string(), "bench series".to_string())
            .await
            .unwrap();
        (approvals, series.id)
    });

    c.bench_function("full_proposal_approval_chain", |b| {
        b.to_async(&runtime)
            .iter(|| run_full_chain(&approvals, series_id));
    });
}

criterion_group!(benches, bench_full_approval_chain);
criterion_main!(benches);
