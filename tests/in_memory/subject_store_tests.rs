//! In-memory integration tests for the subject catalogue.

use super::helpers::{TestSubjectService, seeded_subjects};
use rstest::rstest;
use studyflow::{
    events::ChangeKind,
    subject::{
        domain::{
            DEFAULT_SUBJECT_COLOR, DEFAULT_SUBJECT_ICON, SubjectDomainError, SubjectId,
            SubjectPatch,
        },
        services::{CreateSubjectRequest, SubjectServiceError},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_catalogue_holds_six_subjects(
    seeded_subjects: Result<TestSubjectService, eyre::Report>,
) -> eyre::Result<()> {
    let service = seeded_subjects?;

    let names: Vec<String> = service
        .list_subjects()
        .await?
        .iter()
        .map(|subject| subject.name().to_owned())
        .collect();

    eyre::ensure!(
        names
            == [
                "Mathematics",
                "Physics",
                "Chemistry",
                "Literature",
                "History",
                "Computer Science",
            ],
        "unexpected catalogue {names:?}"
    );
    Ok(())
}

#[rstest]
#[case::known("Physics", "#4ECDC4", "Atom")]
#[case::orphaned("Astronomy", DEFAULT_SUBJECT_COLOR, DEFAULT_SUBJECT_ICON)]
#[case::case_sensitive("physics", DEFAULT_SUBJECT_COLOR, DEFAULT_SUBJECT_ICON)]
#[tokio::test(flavor = "multi_thread")]
async fn decoration_resolves_by_exact_name(
    seeded_subjects: Result<TestSubjectService, eyre::Report>,
    #[case] name: &str,
    #[case] color: &str,
    #[case] icon: &str,
) -> eyre::Result<()> {
    let service = seeded_subjects?;

    let decoration = service.decoration_for(name).await?;

    eyre::ensure!(decoration.color() == color, "colour for {name}");
    eyre::ensure!(decoration.icon() == icon, "icon for {name}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_subject_is_found_by_name(
    seeded_subjects: Result<TestSubjectService, eyre::Report>,
) -> eyre::Result<()> {
    let service = seeded_subjects?;
    let mut events = service.subscribe();

    let created = service
        .create_subject(CreateSubjectRequest::new("  Biology ", "#22C55E", "Leaf"))
        .await?;
    let found = service.find_by_name("Biology").await?;

    eyre::ensure!(created.id().value() == 7, "expected id 7, got {}", created.id());
    eyre::ensure!(found.as_ref() == Some(&created), "lookup by trimmed name");
    eyre::ensure!(
        events.recv().await?.kind() == ChangeKind::Created,
        "creation should be published"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_names_are_rejected(
    seeded_subjects: Result<TestSubjectService, eyre::Report>,
) -> eyre::Result<()> {
    let service = seeded_subjects?;

    let created = service
        .create_subject(CreateSubjectRequest::new("   ", "#000000", "Circle"))
        .await;
    let renamed = service
        .update_subject(SubjectId::FIRST, SubjectPatch::new().with_name(""))
        .await;

    eyre::ensure!(
        matches!(created, Err(SubjectServiceError::Domain(SubjectDomainError::EmptyName))),
        "blank create rejected, got {created:?}"
    );
    eyre::ensure!(
        matches!(renamed, Err(SubjectServiceError::Domain(SubjectDomainError::EmptyName))),
        "blank rename rejected, got {renamed:?}"
    );
    eyre::ensure!(service.list_subjects().await?.len() == 6, "catalogue unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_subject_falls_back_to_default_decoration(
    seeded_subjects: Result<TestSubjectService, eyre::Report>,
) -> eyre::Result<()> {
    let service = seeded_subjects?;
    let history = SubjectId::new(5)?;

    let removed = service.delete_subject(history).await?;
    let decoration = service.decoration_for(removed.name()).await?;
    let again = service.delete_subject(history).await;

    eyre::ensure!(removed.name() == "History", "removed the History subject");
    eyre::ensure!(decoration.color() == DEFAULT_SUBJECT_COLOR, "orphaned colour");
    eyre::ensure!(
        again.as_ref().is_err_and(SubjectServiceError::is_not_found),
        "second delete should be not found"
    );
    Ok(())
}
