mod common;

use common::{create_test_pool, sample_project};

use projects_core::ProjectPatch;
use projects_db::ProjectRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_inserted_project_when_finding_by_id_then_returns_record() {
    // Given: A project stored in the collection
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    let project = sample_project("Alpha", "first project");
    repo.insert(&project).await.unwrap();

    // When: Finding by ID
    let result = repo.find_by_id(project.id).await.unwrap();

    // Then: The stored record comes back intact
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(project.id));
    assert_that!(found.project_name, eq(&project.project_name));
    assert_that!(found.skill_set, eq(&project.skill_set));
    assert_that!(found.no_of_members, eq(3));
    assert_that!(found.is_active, eq(true));
    assert_that!(
        found.created_date.timestamp(),
        eq(project.created_date.timestamp())
    );
}

#[tokio::test]
async fn given_empty_collection_when_finding_by_id_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let result = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_several_projects_when_listing_then_all_are_returned() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    repo.insert(&sample_project("Alpha", "a")).await.unwrap();
    repo.insert(&sample_project("Beta", "b")).await.unwrap();
    repo.insert(&sample_project("Gamma", "c")).await.unwrap();

    let all = repo.find_all().await.unwrap();

    assert_that!(all.len(), eq(3));
}

#[tokio::test]
async fn given_partial_patch_when_updating_then_only_supplied_fields_change() {
    // Given
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    let project = sample_project("Alpha", "first project");
    repo.insert(&project).await.unwrap();

    // When: Patching only the member count
    let patch = ProjectPatch {
        no_of_members: Some(5),
        ..Default::default()
    };
    let updated = repo.update_by_id(project.id, &patch).await.unwrap().unwrap();

    // Then: The returned record and the stored record both reflect the patch
    assert_that!(updated.no_of_members, eq(5));
    assert_that!(updated.project_name, eq(&project.project_name));

    let reread = repo.find_by_id(project.id).await.unwrap().unwrap();
    assert_that!(reread.no_of_members, eq(5));
    assert_that!(reread.project_description, eq(&project.project_description));
    assert_that!(
        reread.created_date.timestamp(),
        eq(project.created_date.timestamp())
    );
}

#[tokio::test]
async fn given_empty_patch_when_updating_then_record_is_unchanged() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    let project = sample_project("Alpha", "first project");
    repo.insert(&project).await.unwrap();

    let updated = repo
        .update_by_id(project.id, &ProjectPatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_that!(updated.project_name, eq(&project.project_name));
    assert_that!(updated.no_of_members, eq(project.no_of_members));
    assert_that!(updated.skill_set, eq(&project.skill_set));
}

#[tokio::test]
async fn given_update_patch_when_clearing_skills_then_skill_set_becomes_empty() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    let project = sample_project("Alpha", "first project");
    repo.insert(&project).await.unwrap();

    let patch = ProjectPatch {
        skill_set: Some(vec![]),
        ..Default::default()
    };
    let updated = repo.update_by_id(project.id, &patch).await.unwrap().unwrap();

    assert_that!(updated.skill_set, is_empty());
}

#[tokio::test]
async fn given_missing_id_when_updating_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let result = repo
        .update_by_id(Uuid::new_v4(), &ProjectPatch::default())
        .await
        .unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_inserted_project_when_deleting_then_record_is_gone() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    let project = sample_project("Alpha", "first project");
    repo.insert(&project).await.unwrap();

    let deleted = repo.delete_by_id(project.id).await.unwrap();

    assert_that!(deleted, eq(true));
    assert_that!(repo.find_by_id(project.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_missing_id_when_deleting_then_returns_false() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);

    let deleted = repo.delete_by_id(Uuid::new_v4()).await.unwrap();

    assert_that!(deleted, eq(false));
}

#[tokio::test]
async fn given_mixed_case_query_when_searching_then_matches_are_case_insensitive() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    repo.insert(&sample_project("Payment Gateway", "handles billing"))
        .await
        .unwrap();
    repo.insert(&sample_project("Website", "marketing site"))
        .await
        .unwrap();

    let by_name = repo.search("PAYMENT").await.unwrap();
    let by_description = repo.search("Billing").await.unwrap();

    assert_that!(by_name.len(), eq(1));
    assert_that!(by_name[0].project_name, eq("Payment Gateway"));
    assert_that!(by_description.len(), eq(1));
}

#[tokio::test]
async fn given_substring_query_when_searching_then_matches_either_field() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    repo.insert(&sample_project("Alpha", "built with Go"))
        .await
        .unwrap();
    repo.insert(&sample_project("Gopher Tools", "utilities"))
        .await
        .unwrap();
    repo.insert(&sample_project("Website", "marketing site"))
        .await
        .unwrap();

    let results = repo.search("go").await.unwrap();

    assert_that!(results.len(), eq(2));
}

#[tokio::test]
async fn given_empty_query_when_searching_then_returns_every_record() {
    // The empty string is a substring of everything; this is the documented
    // boundary behavior.
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    repo.insert(&sample_project("Alpha", "a")).await.unwrap();
    repo.insert(&sample_project("Beta", "b")).await.unwrap();

    let results = repo.search("").await.unwrap();
    let all = repo.find_all().await.unwrap();

    assert_that!(results.len(), eq(all.len()));
}

#[tokio::test]
async fn given_unmatched_query_when_searching_then_returns_empty_set() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    repo.insert(&sample_project("Alpha", "a")).await.unwrap();

    let results = repo.search("zzz").await.unwrap();

    assert_that!(results, is_empty());
}

#[tokio::test]
async fn given_like_metacharacters_when_searching_then_they_match_literally() {
    let pool = create_test_pool().await;
    let repo = ProjectRepository::new(pool);
    repo.insert(&sample_project("100% uptime", "reliability work"))
        .await
        .unwrap();
    repo.insert(&sample_project("Alpha", "plain")).await.unwrap();

    let percent = repo.search("100%").await.unwrap();
    let underscore = repo.search("_").await.unwrap();

    assert_that!(percent.len(), eq(1));
    assert_that!(underscore, is_empty());
}
