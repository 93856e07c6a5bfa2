use crate::error::{Result, ServiceError};
use crate::notification::NotificationService;
use mentorship_database::{AssignmentRepository, Database, MemberRepository};
use mentorship_models::{roles, Member, MentorAssignment, NewAssignment};
use uuid::Uuid;

/// What the policy needs to know about an organization's mentors.
pub trait MentorDirectory {
    async fn list_mentors(&self, organization_id: Uuid) -> Result<Vec<Member>>;
    async fn active_mentee_count(&self, mentor_id: Uuid) -> Result<i64>;
}

/// Where the policy records assignments. Implementations must
/// deactivate every other active assignment for the mentee as part of
/// the same write.
pub trait AssignmentStore {
    async fn create(&self, new: &NewAssignment) -> Result<MentorAssignment>;
}

impl MentorDirectory for MemberRepository {
    async fn list_mentors(&self, organization_id: Uuid) -> Result<Vec<Member>> {
        Ok(self.list_by_role(organization_id, roles::MENTOR).await?)
    }

    async fn active_mentee_count(&self, mentor_id: Uuid) -> Result<i64> {
        Ok(MemberRepository::active_mentee_count(self, mentor_id).await?)
    }
}

impl AssignmentStore for AssignmentRepository {
    async fn create(&self, new: &NewAssignment) -> Result<MentorAssignment> {
        Ok(AssignmentRepository::create(self, new).await?)
    }
}

/// Result of a least-loaded assignment attempt. An organization without
/// mentors is a recognized state, not an error.
#[derive(Debug, Clone)]
pub enum AssignmentOutcome {
    Assigned(MentorAssignment),
    NoMentorsAvailable,
}

/// Selects mentors for mentees.
pub struct AssignmentPolicy<D, S> {
    directory: D,
    store: S,
}

impl<D: MentorDirectory, S: AssignmentStore> AssignmentPolicy<D, S> {
    pub fn new(directory: D, store: S) -> Self {
        Self { directory, store }
    }

    /// Assign `mentee` to the organization's least-loaded mentor.
    ///
    /// Mentors are ranked by their active mentee count; ties go to the
    /// lowest member id, so repeated runs over the same state pick the
    /// same mentor. Calling this again for an already-assigned mentee
    /// is fine: the store supersedes the previous assignment.
    pub async fn assign_least_loaded(
        &self,
        organization_id: Uuid,
        mentee: &Member,
        notes: &str,
    ) -> Result<AssignmentOutcome> {
        if mentee.role != roles::MENTEE {
            return Err(ServiceError::InvalidInput(
                "only mentees can be assigned a mentor".to_string(),
            ));
        }
        if mentee.organization_id != Some(organization_id) {
            return Err(ServiceError::InvalidInput(
                "mentee does not belong to this organization".to_string(),
            ));
        }

        let mut mentors = self.directory.list_mentors(organization_id).await?;
        if mentors.is_empty() {
            tracing::debug!(
                organization_id = %organization_id,
                mentee_id = %mentee.id,
                "no mentors available for assignment"
            );
            return Ok(AssignmentOutcome::NoMentorsAvailable);
        }

        // Ascending id first, then a stable min-by-count scan: equal
        // loads resolve to the lowest mentor id.
        mentors.sort_by_key(|m| m.id);

        let mut loads = Vec::with_capacity(mentors.len());
        for mentor in &mentors {
            let count = self.directory.active_mentee_count(mentor.id).await?;
            loads.push((mentor, count));
        }

        let mut iter = loads.into_iter();
        let first = match iter.next() {
            Some(first) => first,
            None => return Ok(AssignmentOutcome::NoMentorsAvailable),
        };
        let (selected, load) = iter.fold(first, |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        });

        tracing::info!(
            mentee_id = %mentee.id,
            mentor_id = %selected.id,
            load,
            "assigning mentee to least-loaded mentor"
        );

        let assignment = self
            .store
            .create(&NewAssignment {
                mentee_id: mentee.id,
                mentor_id: selected.id,
                assigned_by: None,
                notes: notes.to_string(),
            })
            .await?;

        Ok(AssignmentOutcome::Assigned(assignment))
    }

    /// Record an explicit (re)assignment chosen by `actor`.
    ///
    /// Fails with `CrossOrganizationAssignment` before touching the
    /// store when the two members are not in the same organization.
    pub async fn assign_explicit(
        &self,
        mentee: &Member,
        mentor: &Member,
        actor: Uuid,
        notes: &str,
    ) -> Result<MentorAssignment> {
        if mentee.role != roles::MENTEE || mentor.role != roles::MENTOR {
            return Err(ServiceError::InvalidInput(
                "assignment requires a mentee and a mentor".to_string(),
            ));
        }

        match (mentee.organization_id, mentor.organization_id) {
            (Some(a), Some(b)) if a == b => {}
            _ => return Err(ServiceError::CrossOrganizationAssignment),
        }

        self.store
            .create(&NewAssignment {
                mentee_id: mentee.id,
                mentor_id: mentor.id,
                assigned_by: Some(actor),
                notes: notes.to_string(),
            })
            .await
    }
}

/// Repository-backed facade used by the HTTP layer.
pub struct AssignmentService {
    member_repo: MemberRepository,
    assignment_repo: AssignmentRepository,
    notifications: NotificationService,
}

impl AssignmentService {
    pub fn new(db: &Database, notifications: NotificationService) -> Self {
        let pool = db.pool().clone();

        Self {
            member_repo: MemberRepository::new(pool.clone()),
            assignment_repo: AssignmentRepository::new(pool),
            notifications,
        }
    }

    /// Explicit (re)assignment by an organization admin or mentor.
    pub async fn assign(
        &self,
        mentee_id: Uuid,
        mentor_id: Uuid,
        assigned_by: Uuid,
        notes: &str,
    ) -> Result<MentorAssignment> {
        let mentee = self.member_repo.find_by_id(mentee_id).await?;
        let mentor = self.member_repo.find_by_id(mentor_id).await?;

        let policy =
            AssignmentPolicy::new(self.member_repo.clone(), self.assignment_repo.clone());
        let assignment = policy
            .assign_explicit(&mentee, &mentor, assigned_by, notes)
            .await?;

        self.notifications
            .notify_assignment(&mentor, &mentee)
            .await;

        Ok(assignment)
    }

    /// A mentee's full assignment history, newest first.
    pub async fn history(&self, mentee_id: Uuid) -> Result<Vec<MentorAssignment>> {
        let member = self.member_repo.find_by_id(mentee_id).await?;
        if member.role != roles::MENTEE {
            return Err(ServiceError::InvalidInput(
                "assignment history exists only for mentees".to_string(),
            ));
        }

        Ok(self.assignment_repo.history_for_mentee(mentee_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // In-memory stand-ins for the two policy contracts. The store
    // mirrors the real repository's deactivate-on-insert behavior so
    // the single-active invariant is observable from tests.
    #[derive(Default)]
    struct FakeBackend {
        mentors: Vec<Member>,
        preset_counts: HashMap<Uuid, i64>,
        assignments: Mutex<Vec<MentorAssignment>>,
    }

    impl FakeBackend {
        fn active_assignments(&self, mentor_id: Uuid) -> i64 {
            self.assignments
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.mentor_id == mentor_id && a.is_active)
                .count() as i64
        }

        fn rows(&self) -> Vec<MentorAssignment> {
            self.assignments.lock().unwrap().clone()
        }
    }

    impl MentorDirectory for &FakeBackend {
        async fn list_mentors(&self, organization_id: Uuid) -> Result<Vec<Member>> {
            Ok(self
                .mentors
                .iter()
                .filter(|m| m.organization_id == Some(organization_id))
                .cloned()
                .collect())
        }

        async fn active_mentee_count(&self, mentor_id: Uuid) -> Result<i64> {
            let preset = self.preset_counts.get(&mentor_id).copied().unwrap_or(0);
            Ok(preset + self.active_assignments(mentor_id))
        }
    }

    impl AssignmentStore for &FakeBackend {
        async fn create(&self, new: &NewAssignment) -> Result<MentorAssignment> {
            let mut assignments = self.assignments.lock().unwrap();
            for existing in assignments.iter_mut() {
                if existing.mentee_id == new.mentee_id {
                    existing.is_active = false;
                }
            }

            let assignment = MentorAssignment {
                id: Uuid::new_v4(),
                mentee_id: new.mentee_id,
                mentor_id: new.mentor_id,
                assigned_by: new.assigned_by,
                assigned_at: Utc::now(),
                is_active: true,
                notes: new.notes.clone(),
            };
            assignments.push(assignment.clone());

            Ok(assignment)
        }
    }

    fn org_id() -> Uuid {
        Uuid::from_u128(0xD0)
    }

    fn member(id: u128, role: &str, organization_id: Option<Uuid>) -> Member {
        Member {
            id: Uuid::from_u128(id),
            email: format!("member-{}@example.com", id),
            display_name: format!("Member {}", id),
            role: role.to_string(),
            organization_id,
            phone_number: None,
            email_notifications_enabled: true,
            sms_notifications_enabled: false,
            bio: String::new(),
            created_at: Utc::now(),
        }
    }

    fn backend_with_mentors(mentors: Vec<Member>) -> FakeBackend {
        FakeBackend {
            mentors,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_selects_least_loaded_mentor() {
        // A carries 2 mentees, B none, C one: B must win.
        let a = member(1, roles::MENTOR, Some(org_id()));
        let b = member(2, roles::MENTOR, Some(org_id()));
        let c = member(3, roles::MENTOR, Some(org_id()));
        let mut backend = backend_with_mentors(vec![a.clone(), b.clone(), c.clone()]);
        backend.preset_counts.insert(a.id, 2);
        backend.preset_counts.insert(c.id, 1);

        let mentee = member(10, roles::MENTEE, Some(org_id()));
        let policy = AssignmentPolicy::new(&backend, &backend);

        let outcome = policy
            .assign_least_loaded(org_id(), &mentee, "auto")
            .await
            .unwrap();

        match outcome {
            AssignmentOutcome::Assigned(assignment) => {
                assert_eq!(assignment.mentor_id, b.id);
                assert!(assignment.is_active);
            }
            AssignmentOutcome::NoMentorsAvailable => panic!("expected an assignment"),
        }

        let count = (&backend).active_mentee_count(b.id).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_tie_breaks_by_ascending_member_id() {
        // Equal loads everywhere; input deliberately out of id order.
        let low = member(5, roles::MENTOR, Some(org_id()));
        let mid = member(7, roles::MENTOR, Some(org_id()));
        let high = member(9, roles::MENTOR, Some(org_id()));
        let backend =
            backend_with_mentors(vec![high.clone(), low.clone(), mid.clone()]);

        let mentee = member(10, roles::MENTEE, Some(org_id()));
        let policy = AssignmentPolicy::new(&backend, &backend);

        let outcome = policy
            .assign_least_loaded(org_id(), &mentee, "auto")
            .await
            .unwrap();

        match outcome {
            AssignmentOutcome::Assigned(assignment) => {
                assert_eq!(assignment.mentor_id, low.id);
            }
            AssignmentOutcome::NoMentorsAvailable => panic!("expected an assignment"),
        }
    }

    #[tokio::test]
    async fn test_no_mentors_is_a_recognized_state_not_an_error() {
        let backend = FakeBackend::default();
        let mentee = member(10, roles::MENTEE, Some(org_id()));
        let policy = AssignmentPolicy::new(&backend, &backend);

        let outcome = policy
            .assign_least_loaded(org_id(), &mentee, "auto")
            .await
            .unwrap();

        assert!(matches!(outcome, AssignmentOutcome::NoMentorsAvailable));
        assert!(backend.rows().is_empty());
    }

    #[tokio::test]
    async fn test_reassignment_keeps_exactly_one_active_row() {
        let a = member(1, roles::MENTOR, Some(org_id()));
        let b = member(2, roles::MENTOR, Some(org_id()));
        let backend = backend_with_mentors(vec![a.clone(), b.clone()]);
        let mentee = member(10, roles::MENTEE, Some(org_id()));
        let actor = member(99, roles::MENTOR, Some(org_id()));

        let policy = AssignmentPolicy::new(&backend, &backend);

        policy
            .assign_explicit(&mentee, &a, actor.id, "initial")
            .await
            .unwrap();
        policy
            .assign_explicit(&mentee, &b, actor.id, "reassign")
            .await
            .unwrap();

        let rows = backend.rows();
        assert_eq!(rows.len(), 2, "history must be preserved");

        let active: Vec<_> = rows.iter().filter(|r| r.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].mentor_id, b.id);

        let superseded: Vec<_> = rows.iter().filter(|r| !r.is_active).collect();
        assert_eq!(superseded.len(), 1);
        assert_eq!(superseded[0].mentor_id, a.id);
    }

    #[tokio::test]
    async fn test_cross_organization_assignment_writes_nothing() {
        let other_org = Uuid::from_u128(0xD1);
        let mentor = member(1, roles::MENTOR, Some(other_org));
        let backend = backend_with_mentors(vec![mentor.clone()]);
        let mentee = member(10, roles::MENTEE, Some(org_id()));

        let policy = AssignmentPolicy::new(&backend, &backend);
        let result = policy
            .assign_explicit(&mentee, &mentor, Uuid::from_u128(99), "bad")
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::CrossOrganizationAssignment)
        ));
        assert!(backend.rows().is_empty());
    }

    #[tokio::test]
    async fn test_unaffiliated_members_cannot_be_paired() {
        let mentor = member(1, roles::MENTOR, None);
        let backend = backend_with_mentors(vec![mentor.clone()]);
        let mentee = member(10, roles::MENTEE, Some(org_id()));

        let policy = AssignmentPolicy::new(&backend, &backend);
        let result = policy
            .assign_explicit(&mentee, &mentor, Uuid::from_u128(99), "bad")
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::CrossOrganizationAssignment)
        ));
    }

    #[tokio::test]
    async fn test_repeated_least_loaded_rebalances() {
        // Two mentors, two consecutive auto-assignments of the same
        // mentee: the second run sees the first mentor loaded and moves
        // the mentee to the other one, superseding the first row.
        let a = member(1, roles::MENTOR, Some(org_id()));
        let b = member(2, roles::MENTOR, Some(org_id()));
        let backend = backend_with_mentors(vec![a.clone(), b.clone()]);
        let mentee = member(10, roles::MENTEE, Some(org_id()));

        let policy = AssignmentPolicy::new(&backend, &backend);

        policy
            .assign_least_loaded(org_id(), &mentee, "first")
            .await
            .unwrap();
        policy
            .assign_least_loaded(org_id(), &mentee, "second")
            .await
            .unwrap();

        let rows = backend.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().filter(|r| r.is_active).count(), 1);
    }

    #[tokio::test]
    async fn test_mentee_outside_organization_is_rejected() {
        let mentor = member(1, roles::MENTOR, Some(org_id()));
        let backend = backend_with_mentors(vec![mentor]);
        let mentee = member(10, roles::MENTEE, None);

        let policy = AssignmentPolicy::new(&backend, &backend);
        let result = policy.assign_least_loaded(org_id(), &mentee, "auto").await;

        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
        assert!(backend.rows().is_empty());
    }
}
