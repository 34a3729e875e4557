use engine::store::approvals::{spawn_approvals_actor, Approvals};
use engine::types::approval_types::{ApproverRole, Reviewer, StageStatus, SubjectType};
use engine::types::errors::EngineError;
use engine::types::expense_types::{Bill, ExpenseInput, ExpenseStatus};
use engine::types::proposal_types::{
    FeeSlab, FundingSources, ProgrammeInfo, ProposalDetails, ProposalInput, ProposalStatus,
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

fn capped_reviewer(sub_role: &str, ceiling: i64) -> Reviewer {
    Reviewer {
        max_approval_amount: Some(ceiling),
        ..reviewer(sub_role)
    }
}

fn super_admin() -> Reviewer {
    Reviewer {
        staff_id: 9,
        role: "Super Admin".to_string(),
        sub_role: None,
        max_approval_amount: None,
    }
}

fn proposal_input(total_expenditure: i64) -> ProposalInput {
    ProposalInput {
        details: ProposalDetails {
            programme: ProgrammeInfo {
                title: "Annual Tech Fest".to_string(),
                theme: "Sustainable Engineering".to_string(),
                venue: "Main Auditorium".to_string(),
                coordinator: "R. Sharma".to_string(),
            },
            funding: FundingSources {
                registration_income: 20_000,
                sponsorship_income: 15_000,
                institute_support: 10_000,
                other_income: 5_000,
            },
            registration_fees: vec![FeeSlab {
                category: "External".to_string(),
                amount: 500,
            }],
        },
        total_expenditure,
        documents: vec!["https://files.example/plan.pdf".to_string()],
    }
}

fn expense_input(amounts: &[i64]) -> ExpenseInput {
    ExpenseInput {
        bills: amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| Bill {
                description: format!("bill {}", i + 1),
                amount: *amount,
                bill_number: format!("B-{}", i + 1),
                bill_date: "2025-03-01".to_string(),
                vendor: "Campus Caterers".to_string(),
                attachment_url: None,
            })
            .collect(),
        event_report_document_url: Some("https://files.example/report.pdf".to_string()),
        notes: None,
    }
}

async fn setup_occurrence(approvals: &Approvals) -> u64 {
    let series = approvals
        .create_series("Tech Fest".to_string(), "Annual festival".to_string())
        .await
        .unwrap();
    let occurrence = approvals
        .create_occurrence(
            series.id,
            OccurrenceInput {
                title: "Tech Fest 2025".to_string(),
                scheduled_start_date: "2025-02-10".to_string(),
                scheduled_end_date: "2025-02-12".to_string(),
            },
        )
        .await
        .unwrap();
    occurrence.id
}

async fn submitted_proposal(approvals: &Approvals, total_expenditure: i64) -> u64 {
    let occurrence_id = setup_occurrence(approvals).await;
    approvals
        .create_proposal(occurrence_id, proposal_input(total_expenditure))
        .await
        .unwrap();
    approvals.submit_proposal(occurrence_id).await.unwrap();
    occurrence_id
}

async fn proposal_at_student_affairs(approvals: &Approvals, total_expenditure: i64) -> u64 {
    let occurrence_id = submitted_proposal(approvals, total_expenditure).await;
    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("President"),
            "fine by me".to_string(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    occurrence_id
}

#[tokio::test]
async fn linear_chain_reaches_proposal_approved() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 50_000).await;

    let snapshot = approvals.get_proposal(occurrence_id).await.unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::PendingPresident);
    assert_eq!(snapshot.awaiting, vec!["President".to_string()]);

    let snapshot = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("President"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingStudentAffairs
    );

    let snapshot = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa],
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingJointRegistrar
    );

    let snapshot = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Joint Registrar SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::ProposalApproved);
    assert!(snapshot.awaiting.is_empty());
}

#[tokio::test]
async fn fan_out_requires_every_branch_to_approve() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    let snapshot = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingJointRegistrar
    );
    assert_eq!(
        snapshot.awaiting,
        vec!["Joint Registrar SA".to_string(), "Dean SA".to_string()]
    );

    // One branch resolving leaves the subject non-terminal.
    let snapshot = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingJointRegistrar
    );

    let snapshot = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Joint Registrar SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::ProposalApproved);
}

#[tokio::test]
async fn single_branch_rejection_rejects_the_whole_proposal() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();

    let snapshot = approvals
        .reject_proposal(
            occurrence_id,
            reviewer("Joint Registrar SA"),
            "Budget exceeds cap".to_string(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::Rejected);
    // The approved Dean branch stays approved; nothing is left pending.
    assert!(snapshot
        .stages
        .iter()
        .all(|s| s.status != StageStatus::Pending));
}

#[tokio::test]
async fn empty_stage_selection_is_rejected_without_side_effects() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    let err = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let snapshot = approvals.get_proposal(occurrence_id).await.unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingStudentAffairs
    );
    let history = approvals
        .approval_history(SubjectType::Proposal, occurrence_id)
        .await
        .unwrap();
    // Only the president's approval is on record.
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn short_comment_fails_validation_and_leaves_no_trace() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 50_000).await;

    let err = approvals
        .reject_proposal(occurrence_id, reviewer("President"), "no".to_string(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let snapshot = approvals.get_proposal(occurrence_id).await.unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::PendingPresident);
    let history = approvals
        .approval_history(SubjectType::Proposal, occurrence_id)
        .await
        .unwrap();
    assert!(history.is_empty());

    let snapshot = approvals
        .reject_proposal(
            occurrence_id,
            reviewer("President"),
            "Budget exceeds cap".to_string(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::Rejected);
}

#[tokio::test]
async fn role_mismatch_is_forbidden() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 50_000).await;

    let err = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));

    let err = approvals
        .approve_proposal(
            occurrence_id,
            Reviewer {
                staff_id: 7,
                role: "Warden".to_string(),
                sub_role: None,
                max_approval_amount: None,
            },
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));
}

#[tokio::test]
async fn amount_ceiling_blocks_even_matching_roles() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 100_000).await;

    let err = approvals
        .approve_proposal(
            occurrence_id,
            capped_reviewer("President", 50_000),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));

    let snapshot = approvals.get_proposal(occurrence_id).await.unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::PendingPresident);
    let history = approvals
        .approval_history(SubjectType::Proposal, occurrence_id)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn super_admin_bypasses_role_match_but_not_ceiling() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 100_000).await;

    let err = approvals
        .approve_proposal(
            occurrence_id,
            Reviewer {
                max_approval_amount: Some(50_000),
                ..super_admin()
            },
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));

    // Without a ceiling the same account may decide any stage.
    let snapshot = approvals
        .approve_proposal(occurrence_id, super_admin(), String::new(), Vec::new(), None)
        .await
        .unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingStudentAffairs
    );
}

#[tokio::test]
async fn super_admin_must_name_the_branch_when_several_are_pending() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();

    let err = approvals
        .approve_proposal(occurrence_id, super_admin(), String::new(), Vec::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let snapshot = approvals
        .approve_proposal(
            occurrence_id,
            super_admin(),
            String::new(),
            Vec::new(),
            Some(ApproverRole::DeanSa),
        )
        .await
        .unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingJointRegistrar
    );
}

#[tokio::test]
async fn repeated_decision_on_a_resolved_stage_conflicts() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();

    let err = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Conflict(_)));
}

#[tokio::test]
async fn president_cannot_redecide_after_the_chain_advances() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    // The president's stage is resolved and Student Affairs is awaited, so
    // this is a plain authorization failure, not a race.
    let err = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("President"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));
}

#[tokio::test]
async fn decision_on_a_branch_voided_by_rejection_conflicts() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();
    approvals
        .reject_proposal(
            occurrence_id,
            reviewer("Joint Registrar SA"),
            "insufficient sponsorship coverage".to_string(),
            None,
        )
        .await
        .unwrap();

    let err = approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Conflict(_)));
}

#[tokio::test]
async fn revision_resubmission_reenters_at_student_affairs() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    let snapshot = approvals
        .request_proposal_revision(
            occurrence_id,
            reviewer("Student Affairs"),
            "please revise the venue budget".to_string(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.proposal.status, ProposalStatus::RevisionRequested);

    // Control returns to the submitter, who may edit and resubmit.
    approvals
        .update_proposal(occurrence_id, proposal_input(40_000))
        .await
        .unwrap();
    let snapshot = approvals.submit_proposal(occurrence_id).await.unwrap();
    assert_eq!(
        snapshot.proposal.status,
        ProposalStatus::PendingStudentAffairs
    );
    assert_eq!(snapshot.awaiting, vec!["Student Affairs".to_string()]);
}

#[tokio::test]
async fn rejected_proposal_is_terminal() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 50_000).await;

    approvals
        .reject_proposal(
            occurrence_id,
            reviewer("President"),
            "not aligned with calendar".to_string(),
            None,
        )
        .await
        .unwrap();

    let err = approvals
        .update_proposal(occurrence_id, proposal_input(10_000))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));

    let err = approvals.submit_proposal(occurrence_id).await.unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));
}

#[tokio::test]
async fn proposal_edits_are_blocked_while_under_review() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 50_000).await;

    let err = approvals
        .update_proposal(occurrence_id, proposal_input(10_000))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));
}

#[tokio::test]
async fn expected_income_is_always_the_sum_of_funding_sources() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = setup_occurrence(&approvals).await;

    let snapshot = approvals
        .create_proposal(occurrence_id, proposal_input(50_000))
        .await
        .unwrap();
    assert_eq!(snapshot.proposal.total_expected_income, 50_000);

    let mut input = proposal_input(50_000);
    input.details.funding.sponsorship_income = 40_000;
    let snapshot = approvals
        .update_proposal(occurrence_id, input)
        .await
        .unwrap();
    assert_eq!(snapshot.proposal.total_expected_income, 75_000);
}

#[tokio::test]
async fn history_records_one_ordered_event_per_decision() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = proposal_at_student_affairs(&approvals, 50_000).await;

    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Joint Registrar SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();

    let history = approvals
        .approval_history(SubjectType::Proposal, occurrence_id)
        .await
        .unwrap();
    assert_eq!(history.len(), 4);
    assert!(history
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp));

    // Only the Student Affairs fan-out carries next stages.
    let fan_out = &history[1];
    assert_eq!(fan_out.actor_sub_role.as_deref(), Some("Student Affairs"));
    assert_eq!(
        fan_out.next_stages,
        vec![ApproverRole::JointRegistrarSa, ApproverRole::DeanSa]
    );
    assert!(history[0].next_stages.is_empty());
    assert!(history[2].next_stages.is_empty());
}

#[tokio::test]
async fn occurrence_status_mirrors_the_workflow() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 50_000).await;

    let series_id = {
        let all = approvals.list_series().await;
        all[0].id
    };
    let series = approvals.get_series(series_id).await.unwrap();
    assert_eq!(series.occurrences[0].status, "pending_president");
}

#[tokio::test]
async fn expense_requires_an_approved_proposal() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = submitted_proposal(&approvals, 50_000).await;

    let err = approvals
        .create_expense(occurrence_id, expense_input(&[10_000]))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));
}

async fn approved_proposal(approvals: &Approvals, total_expenditure: i64) -> u64 {
    let occurrence_id = proposal_at_student_affairs(approvals, total_expenditure).await;
    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa],
            None,
        )
        .await
        .unwrap();
    approvals
        .approve_proposal(
            occurrence_id,
            reviewer("Joint Registrar SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    occurrence_id
}

#[tokio::test]
async fn expense_flows_from_student_affairs_through_branches() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = approved_proposal(&approvals, 50_000).await;

    let snapshot = approvals
        .create_expense(occurrence_id, expense_input(&[30_000, 12_000]))
        .await
        .unwrap();
    assert_eq!(snapshot.expense.approval_status, ExpenseStatus::Pending);
    assert_eq!(snapshot.total_expenditure, 42_000);
    assert_eq!(snapshot.awaiting, vec!["Student Affairs".to_string()]);

    let snapshot = approvals
        .approve_expense(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.expense.approval_status, ExpenseStatus::PendingDean);

    let snapshot = approvals
        .approve_expense(
            occurrence_id,
            reviewer("Dean SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.expense.approval_status, ExpenseStatus::Approved);

    let history = approvals
        .approval_history(SubjectType::Expense, occurrence_id)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn expense_ceiling_uses_the_sum_of_bills() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = approved_proposal(&approvals, 50_000).await;

    approvals
        .create_expense(occurrence_id, expense_input(&[60_000, 40_000]))
        .await
        .unwrap();

    let err = approvals
        .approve_expense(
            occurrence_id,
            capped_reviewer("Student Affairs", 50_000),
            String::new(),
            vec![ApproverRole::DeanSa],
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));

    let snapshot = approvals.get_expense(occurrence_id).await.unwrap();
    assert_eq!(snapshot.expense.approval_status, ExpenseStatus::Pending);
    let history = approvals
        .approval_history(SubjectType::Expense, occurrence_id)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn expense_rejection_is_terminal_and_first_wins() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = approved_proposal(&approvals, 50_000).await;

    approvals
        .create_expense(occurrence_id, expense_input(&[20_000]))
        .await
        .unwrap();
    approvals
        .approve_expense(
            occurrence_id,
            reviewer("Student Affairs"),
            String::new(),
            vec![ApproverRole::JointRegistrarSa, ApproverRole::AssociateDeanSa],
            None,
        )
        .await
        .unwrap();

    let snapshot = approvals
        .reject_expense(
            occurrence_id,
            reviewer("Associate Dean SA"),
            "bills do not match the sanctioned budget".to_string(),
            None,
        )
        .await
        .unwrap();
    assert_eq!(snapshot.expense.approval_status, ExpenseStatus::Rejected);

    let err = approvals
        .approve_expense(
            occurrence_id,
            reviewer("Joint Registrar SA"),
            String::new(),
            Vec::new(),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Conflict(_)));

    let err = approvals
        .update_expense(occurrence_id, expense_input(&[1_000]))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Forbidden(_)));
}

#[tokio::test]
async fn unknown_occurrence_is_not_found() {
    let approvals = spawn_approvals_actor();

    let err = approvals.get_proposal(404_404).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));

    let err = approvals
        .create_proposal(404_404, proposal_input(1_000))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));

    let err = approvals
        .approval_history(SubjectType::Proposal, 404_404)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[tokio::test]
async fn only_one_proposal_per_occurrence() {
    let approvals = spawn_approvals_actor();
    let occurrence_id = setup_occurrence(&approvals).await;

    approvals
        .create_proposal(occurrence_id, proposal_input(10_000))
        .await
        .unwrap();
    let err = approvals
        .create_proposal(occurrence_id, proposal_input(10_000))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}
