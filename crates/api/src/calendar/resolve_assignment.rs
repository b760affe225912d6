use tracing::warn;
use wildcal_domain::{Assignment, AssignmentView, Photographer, Submission, SubmissionStatus};
use wildcal_infra::WildcalContext;

/// An `Assignment` resolved through every link of the chain. The query
/// paths only need the denormalized view; the notification job also needs
/// the photographer's contact identity.
pub struct ResolvedAssignment {
    pub view: AssignmentView,
    pub submission: Submission,
    pub photographer: Photographer,
}

/// Walks Assignment -> Submission -> Photographer and fails closed: a
/// missing or non-approved link yields `None` with a data-integrity
/// warning, never a partial view. An orphaned reference is not expected
/// but must degrade gracefully at the read path.
pub async fn resolve_assignment_full(
    assignment: &Assignment,
    ctx: &WildcalContext,
) -> Option<ResolvedAssignment> {
    let submission_id = assignment.submission_id.clone()?;

    let submission = match ctx.repos.submissions.find(&submission_id).await {
        Some(submission) => submission,
        None => {
            warn!(
                "Assignment for date {} references missing submission {}",
                assignment.date, submission_id
            );
            return None;
        }
    };

    if submission.status != SubmissionStatus::Approved {
        warn!(
            "Assignment for date {} references submission {} which is {}",
            assignment.date, submission.id, submission.status
        );
        return None;
    }

    let photographer = match ctx.repos.photographers.find(&submission.photographer_id).await {
        Some(photographer) => photographer,
        None => {
            warn!(
                "Submission {} references missing photographer {}",
                submission.id, submission.photographer_id
            );
            return None;
        }
    };

    let view = AssignmentView {
        date: assignment.date,
        submission_id: submission.id.clone(),
        image_url: submission.image_web_url.clone(),
        caption: submission.caption.clone(),
        photographer_name: photographer.name.clone(),
        photographer_handle: photographer.instagram_handle.clone(),
    };

    Some(ResolvedAssignment {
        view,
        submission,
        photographer,
    })
}

pub async fn resolve_assignment(
    assignment: &Assignment,
    ctx: &WildcalContext,
) -> Option<AssignmentView> {
    resolve_assignment_full(assignment, ctx)
        .await
        .map(|resolved| resolved.view)
}

#[cfg(test)]
mod test {
    use super::*;
    use wildcal_domain::ID;

    fn unresolved_assignment() -> Assignment {
        let mut assignment = Assignment::new(chrono::NaiveDate::from_ymd_opt(2026, 5, 4).unwrap());
        assignment.submission_id = Some(ID::new());
        assignment
    }

    #[actix_web::main]
    #[test]
    async fn it_resolves_nothing_without_submission_id() {
        let ctx = WildcalContext::create_inmemory();
        let assignment = Assignment::new(chrono::NaiveDate::from_ymd_opt(2026, 5, 4).unwrap());

        assert!(resolve_assignment(&assignment, &ctx).await.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn it_fails_closed_on_orphaned_submission() {
        let ctx = WildcalContext::create_inmemory();
        let assignment = unresolved_assignment();

        assert!(resolve_assignment(&assignment, &ctx).await.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn it_fails_closed_on_missing_photographer() {
        let ctx = WildcalContext::create_inmemory();

        let submission = Submission::new(
            ID::new(),
            "/uploads/original.jpg".into(),
            "/uploads/web.jpg".into(),
            None,
            0,
        );
        let mut submission = submission;
        submission.approve(1).unwrap();
        ctx.repos.submissions.insert(&submission).await.unwrap();

        let mut assignment = unresolved_assignment();
        assignment.submission_id = Some(submission.id.clone());

        assert!(resolve_assignment(&assignment, &ctx).await.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn it_fails_closed_on_pending_submission() {
        let ctx = WildcalContext::create_inmemory();

        let photographer = Photographer::new("Jane".into(), "jane@example.com".into(), None);
        ctx.repos.photographers.insert(&photographer).await.unwrap();

        let submission = Submission::new(
            photographer.id.clone(),
            "/uploads/original.jpg".into(),
            "/uploads/web.jpg".into(),
            None,
            0,
        );
        ctx.repos.submissions.insert(&submission).await.unwrap();

        let mut assignment = unresolved_assignment();
        assignment.submission_id = Some(submission.id.clone());

        assert!(resolve_assignment(&assignment, &ctx).await.is_none());
    }
}
