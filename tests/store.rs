//! Store tests against a real Postgres instance. `#[sqlx::test]` gives each
//! test its own freshly-migrated database, so the ownership scoping,
//! ordering and partial-update behavior are checked at the SQL level.

use pretty_assertions::assert_eq;
use sqlx::PgPool;

use solo_suite::db::Database;
use solo_suite::error::{Entity, Error};
use solo_suite::models::{
    ActingUser, CreateClient, CreateLead, UpdateClient, UpdateLead,
};

async fn seed_user(pool: &PgPool, email: &str) -> ActingUser {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, password_hash, name) VALUES ($1, 'x', 'Test User') RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap();
    ActingUser(id)
}

fn client_input(name: &str, company: Option<&str>) -> CreateClient {
    CreateClient {
        name: name.to_string(),
        company: company.map(str::to_string),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        status: None,
        lead_id: None,
    }
}

fn lead_input(title: &str) -> CreateLead {
    CreateLead {
        title: title.to_string(),
        company: "Acme".to_string(),
        contact_name: None,
        contact_email: None,
        contact_phone: None,
        value: None,
        status: None,
        lead_type: "Design".to_string(),
    }
}

async fn backdate_lead(pool: &PgPool, id: i64, days: i32) {
    sqlx::query("UPDATE leads SET created_at = now() - make_interval(days => $1) WHERE id = $2")
        .bind(days)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test]
async fn rows_are_invisible_across_users(pool: PgPool) {
    let db = Database::from_pool(pool.clone());
    let alice = seed_user(&pool, "alice@example.com").await;
    let bob = seed_user(&pool, "bob@example.com").await;

    let client = db
        .create_client(alice, client_input("Jane Cooper", Some("Acme Corp")))
        .await
        .unwrap();

    let err = db.get_client(bob, client.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(Entity::Client)));

    let patch = UpdateClient {
        name: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let err = db.update_client(bob, client.id, patch).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(Entity::Client)));

    let err = db.delete_client(bob, client.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(Entity::Client)));

    // The owner still sees the row, untouched by the foreign update.
    let kept = db.get_client(alice, client.id).await.unwrap();
    assert_eq!(kept.name, "Jane Cooper");

    // Foreign rows never show up in lists either.
    assert!(db.list_clients(bob).await.unwrap().is_empty());
}

#[sqlx::test]
async fn lists_return_newest_first(pool: PgPool) {
    let db = Database::from_pool(pool.clone());
    let user = seed_user(&pool, "alice@example.com").await;

    let oldest = db.create_lead(user, lead_input("Oldest")).await.unwrap();
    let middle = db.create_lead(user, lead_input("Middle")).await.unwrap();
    let newest = db.create_lead(user, lead_input("Newest")).await.unwrap();
    backdate_lead(&pool, oldest.id, 30).await;
    backdate_lead(&pool, middle.id, 7).await;
    backdate_lead(&pool, newest.id, 1).await;

    let titles: Vec<String> = db
        .list_leads(user)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.lead.title)
        .collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
}

#[sqlx::test]
async fn update_touches_only_present_fields(pool: PgPool) {
    let db = Database::from_pool(pool.clone());
    let user = seed_user(&pool, "alice@example.com").await;

    let client = db
        .create_client(user, client_input("Jane Cooper", Some("Acme Corp")))
        .await
        .unwrap();

    // Absent fields stay as stored.
    let patch = UpdateClient {
        name: Some("Jane C. Cooper".to_string()),
        ..Default::default()
    };
    let updated = db.update_client(user, client.id, patch).await.unwrap();
    assert_eq!(updated.name, "Jane C. Cooper");
    assert_eq!(updated.company.as_deref(), Some("Acme Corp"));
    assert_eq!(updated.email, client.email);

    // An explicit null clears the column without touching the rest.
    let patch = UpdateClient {
        company: Some(None),
        ..Default::default()
    };
    let updated = db.update_client(user, client.id, patch).await.unwrap();
    assert_eq!(updated.company, None);
    assert_eq!(updated.name, "Jane C. Cooper");

    // An empty patch is a no-op read, not an error.
    let updated = db
        .update_client(user, client.id, UpdateClient::default())
        .await
        .unwrap();
    assert_eq!(updated.name, "Jane C. Cooper");
}

#[sqlx::test]
async fn lead_contact_clear_reaches_the_row(pool: PgPool) {
    let db = Database::from_pool(pool.clone());
    let user = seed_user(&pool, "alice@example.com").await;

    let mut input = lead_input("Website redesign");
    input.contact_name = Some("Sam".to_string());
    input.contact_email = Some("sam@acme.com".to_string());
    let lead = db.create_lead(user, input).await.unwrap();

    let patch = UpdateLead {
        contact_name: Some(None),
        ..Default::default()
    };
    let updated = db.update_lead(user, lead.id, patch).await.unwrap();
    assert_eq!(updated.lead.contact_name, None);
    assert_eq!(updated.lead.contact_email.as_deref(), Some("sam@acme.com"));
}

#[sqlx::test]
async fn second_delete_reports_not_found(pool: PgPool) {
    let db = Database::from_pool(pool.clone());
    let user = seed_user(&pool, "alice@example.com").await;

    let client = db
        .create_client(user, client_input("Jane Cooper", None))
        .await
        .unwrap();

    db.delete_client(user, client.id).await.unwrap();
    let err = db.delete_client(user, client.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(Entity::Client)));
}

#[sqlx::test]
async fn lead_converts_into_at_most_one_client(pool: PgPool) {
    let db = Database::from_pool(pool.clone());
    let user = seed_user(&pool, "alice@example.com").await;

    let lead = db.create_lead(user, lead_input("Website redesign")).await.unwrap();

    let mut first = client_input("Jane Cooper", Some("Acme Corp"));
    first.lead_id = Some(lead.id);
    let converted = db.create_client(user, first).await.unwrap();
    assert_eq!(converted.lead_id, Some(lead.id));

    // A second conversion of the same lead is rejected.
    let mut second = client_input("John Doe", None);
    second.lead_id = Some(lead.id);
    let err = db.create_client(user, second).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // Re-submitting the link on the client that already holds it is fine.
    let patch = UpdateClient {
        lead_id: Some(Some(lead.id)),
        ..Default::default()
    };
    db.update_client(user, converted.id, patch).await.unwrap();

    // Nor can another client steal the link via update.
    let other = db.create_client(user, client_input("John Doe", None)).await.unwrap();
    let patch = UpdateClient {
        lead_id: Some(Some(lead.id)),
        ..Default::default()
    };
    let err = db.update_client(user, other.id, patch).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // The lead list carries exactly one row for the lead, joined to the
    // converting client.
    let rows = db.list_leads(user).await.unwrap();
    let matching: Vec<_> = rows.iter().filter(|r| r.lead.id == lead.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].client_name.as_deref(), Some("Jane Cooper"));
}

#[sqlx::test]
async fn foreign_lead_reference_fails_validation(pool: PgPool) {
    let db = Database::from_pool(pool.clone());
    let alice = seed_user(&pool, "alice@example.com").await;
    let bob = seed_user(&pool, "bob@example.com").await;

    let lead = db.create_lead(alice, lead_input("Website redesign")).await.unwrap();

    let mut input = client_input("John Doe", None);
    input.lead_id = Some(lead.id);
    let err = db.create_client(bob, input).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
