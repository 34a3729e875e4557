use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};

use crate::types::errors::EngineError;
use crate::types::staff_types::Staff;

#[derive(Debug)]
enum Command {
    AddStaff(Staff, oneshot::Sender<Result<Staff, EngineError>>),
    GetStaffByEmail(String, oneshot::Sender<Option<Staff>>),
    GetStaffById(u64, oneshot::Sender<Option<Staff>>),
    ListStaff(oneshot::Sender<Vec<Staff>>),
}

/// Reviewer-account registry. Resolves the role, sub-role and approval
/// ceiling attached to each authenticated caller.
#[derive(Clone)]
pub struct StaffStore {
    tx: mpsc::Sender<Command>,
}

impl StaffStore {
    pub async fn add_staff(&self, staff: Staff) -> Result<Staff, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::AddStaff(staff, tx)).await;
        rx.await
            .unwrap_or_else(|_| Err(EngineError::Internal("staff store unavailable".into())))
    }

    pub async fn get_staff_by_email(&self, email: String) -> Option<Staff> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::GetStaffByEmail(email, tx)).await;
        rx.await.ok().flatten()
    }

    pub async fn get_staff_by_id(&self, id: u64) -> Option<Staff> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::GetStaffById(id, tx)).await;
        rx.await.ok().flatten()
    }

    pub async fn list_staff(&self) -> Vec<Staff> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::ListStaff(tx)).await;
        rx.await.unwrap_or_default()
    }
}

pub fn spawn_staff_actor() -> StaffStore {
    let (tx, mut rx) = mpsc::channel::<Command>(1000);

    tokio::spawn(async move {
        let mut accounts: HashMap<u64, Staff> = HashMap::new();

        while let Some(cmd) = rx.recv().await {
            match cmd {
                Command::AddStaff(staff, reply) => {
                    let duplicate = accounts.values().any(|s| s.email == staff.email);
                    if duplicate {
                        let _ = reply.send(Err(EngineError::Validation(
                            "email is already registered".to_string(),
                        )));
                    } else {
                        accounts.insert(staff.id, staff.clone());
                        let _ = reply.send(Ok(staff));
                    }
                }
                Command::GetStaffByEmail(email, reply) => {
                    let staff = accounts.values().find(|s| s.email == email).cloned();
                    let _ = reply.send(staff);
                }
                Command::GetStaffById(id, reply) => {
                    let _ = reply.send(accounts.get(&id).cloned());
                }
                Command::ListStaff(reply) => {
                    let mut all: Vec<Staff> = accounts.values().cloned().collect();
                    all.sort_by_key(|s| s.id);
                    let _ = reply.send(all);
                }
            }
        }
    });

    StaffStore { tx }
}
