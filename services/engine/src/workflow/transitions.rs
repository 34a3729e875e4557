use crate::types::approval_types::{ApproverRole, Decision, Reviewer};
use crate::types::errors::EngineError;

pub const MIN_DECISION_COMMENT: usize = 10;

/// Rejection and revision requests must explain themselves; approvals may
/// carry any comment including none.
pub fn validate_decision_comment(decision: Decision, comments: &str) -> Result<(), EngineError> {
    match decision {
        Decision::Approved => Ok(()),
        Decision::Rejected | Decision::RevisionRequested => {
            if comments.trim().chars().count() < MIN_DECISION_COMMENT {
                Err(EngineError::Validation(format!(
                    "a comment of at least {} characters is required",
                    MIN_DECISION_COMMENT
                )))
            } else {
                Ok(())
            }
        }
    }
}

/// A Student Affairs approval fans out to one or more of the three branch
/// stages. Duplicates collapse; anything outside the branch set is refused.
pub fn validate_branch_selection(
    next_stages: &[ApproverRole],
) -> Result<Vec<ApproverRole>, EngineError> {
    if next_stages.is_empty() {
        return Err(EngineError::Validation(
            "select at least one next approval stage".to_string(),
        ));
    }

    let mut selected: Vec<ApproverRole> = Vec::new();
    for role in next_stages {
        if !role.is_branch_stage() {
            return Err(EngineError::Validation(format!(
                "{} is not a valid next approval stage",
                role.as_str()
            )));
        }
        if !selected.contains(role) {
            selected.push(*role);
        }
    }
    Ok(selected)
}

/// Approval-amount ceiling. Applies to every actor, Super Admin included;
/// an unset ceiling passes unconditionally.
pub fn check_amount_ceiling(reviewer: &Reviewer, total_expenditure: i64) -> Result<(), EngineError> {
    match reviewer.max_approval_amount {
        Some(ceiling) if total_expenditure > ceiling => Err(EngineError::Forbidden(format!(
            "amount exceeds your approval limit of {}",
            ceiling
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviewer(ceiling: Option<i64>) -> Reviewer {
        Reviewer {
            staff_id: 1,
            role: "Admin".to_string(),
            sub_role: Some("Dean SA".to_string()),
            max_approval_amount: ceiling,
        }
    }

    #[test]
    fn approve_comment_is_unconstrained() {
        assert!(validate_decision_comment(Decision::Approved, "").is_ok());
        assert!(validate_decision_comment(Decision::Approved, "ok").is_ok());
    }

    #[test]
    fn reject_comment_needs_ten_characters() {
        assert!(matches!(
            validate_decision_comment(Decision::Rejected, "no"),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            validate_decision_comment(Decision::Rejected, "too short"),
            Err(EngineError::Validation(_))
        ));
        assert!(validate_decision_comment(Decision::Rejected, "Budget exceeds cap").is_ok());
    }

    #[test]
    fn revision_comment_needs_ten_characters() {
        assert!(matches!(
            validate_decision_comment(Decision::RevisionRequested, "redo"),
            Err(EngineError::Validation(_))
        ));
        assert!(
            validate_decision_comment(Decision::RevisionRequested, "please revise the budget")
                .is_ok()
        );
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_comment_rule() {
        assert!(matches!(
            validate_decision_comment(Decision::Rejected, "   no    "),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn empty_branch_selection_is_refused() {
        assert!(matches!(
            validate_branch_selection(&[]),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn non_branch_roles_are_refused() {
        assert!(matches!(
            validate_branch_selection(&[ApproverRole::President]),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            validate_branch_selection(&[ApproverRole::StudentAffairs]),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn duplicate_branches_collapse() {
        let selected = validate_branch_selection(&[
            ApproverRole::DeanSa,
            ApproverRole::JointRegistrarSa,
            ApproverRole::DeanSa,
        ])
        .unwrap();
        assert_eq!(
            selected,
            vec![ApproverRole::DeanSa, ApproverRole::JointRegistrarSa]
        );
    }

    #[test]
    fn missing_ceiling_always_passes() {
        assert!(check_amount_ceiling(&reviewer(None), i64::MAX).is_ok());
    }

    #[test]
    fn ceiling_is_exclusive_above() {
        assert!(check_amount_ceiling(&reviewer(Some(50_000)), 50_000).is_ok());
        assert!(matches!(
            check_amount_ceiling(&reviewer(Some(50_000)), 50_001),
            Err(EngineError::Forbidden(_))
        ));
    }
}
