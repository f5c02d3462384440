//! Tenant-scoped persistence layer.
//!
//! Every query here filters by the acting user's id. Single-row reads and
//! mutations additionally filter by the target id in the same predicate,
//! so a row owned by another user is indistinguishable from a row that
//! does not exist. Lists are ordered newest-first; that ordering is part
//! of the API contract.
//!
//! Partial updates build their SET clause from the fields actually present
//! in the payload, execute the scoped conditional UPDATE, then re-read the
//! row under the same scope. A delete racing between those two steps
//! surfaces as NotFound.

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::config::Config;
use crate::dashboard::{self, DashboardSummary};
use crate::error::{Entity, Error, Result};
use crate::models::{
    ActingUser, Client, ClientStatus, CreateClient, CreateInvoice, CreateLead, CreateProject,
    Invoice, InvoiceStatus, InvoiceWithRelated, Lead, LeadStatus, LeadWithClient, ProjectStatus,
    ProjectWithClient, UpdateClient, UpdateInvoice, UpdateLead, UpdateProject,
};

const PROJECT_COLUMNS: &str = "p.id, p.name, p.status, p.progress, p.due_date, p.client_id, \
     p.user_id, p.created_at, c.name AS client_name, c.company AS client_company";

const INVOICE_COLUMNS: &str = "i.id, i.number, i.date, i.amount, i.status, i.client_id, \
     i.project_id, i.user_id, i.created_at, c.name AS client_name, \
     c.company AS client_company, p.name AS project_name";

const LEAD_COLUMNS: &str = "l.id, l.title, l.company, l.contact_name, l.contact_email, \
     l.contact_phone, l.value, l.status, l.lead_type, l.user_id, l.created_at, \
     c.name AS client_name, c.company AS client_company";

/// Database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(config.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an already-constructed pool (tests and tooling that manage
    /// their own connections).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // Client operations

    pub async fn list_clients(&self, user: ActingUser) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user.0)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn get_client(&self, user: ActingUser, id: i64) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user.0)
        .fetch_optional(&self.pool)
        .await?;

        client.ok_or(Error::NotFound(Entity::Client))
    }

    pub async fn create_client(&self, user: ActingUser, input: CreateClient) -> Result<Client> {
        if let Some(lead_id) = input.lead_id {
            self.ensure_lead_available(user, lead_id, None).await?;
        }

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, company, email, phone, status, lead_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(input.name)
        .bind(input.company)
        .bind(input.email)
        .bind(input.phone)
        .bind(input.status.unwrap_or(ClientStatus::Active).as_str())
        .bind(input.lead_id)
        .bind(user.0)
        .fetch_one(&self.pool)
        .await
        .map_err(lead_conflict)?;

        Ok(client)
    }

    pub async fn update_client(
        &self,
        user: ActingUser,
        id: i64,
        input: UpdateClient,
    ) -> Result<Client> {
        if let Some(Some(lead_id)) = input.lead_id {
            self.ensure_lead_available(user, lead_id, Some(id)).await?;
        }

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE clients SET ");
        let mut changed = false;
        {
            let mut sets = qb.separated(", ");
            if let Some(name) = input.name {
                sets.push("name = ").push_bind_unseparated(name);
                changed = true;
            }
            if let Some(company) = input.company {
                sets.push("company = ").push_bind_unseparated(company);
                changed = true;
            }
            if let Some(email) = input.email {
                sets.push("email = ").push_bind_unseparated(email);
                changed = true;
            }
            if let Some(phone) = input.phone {
                sets.push("phone = ").push_bind_unseparated(phone);
                changed = true;
            }
            if let Some(status) = input.status {
                sets.push("status = ").push_bind_unseparated(status.as_str());
                changed = true;
            }
            if let Some(lead_id) = input.lead_id {
                sets.push("lead_id = ").push_bind_unseparated(lead_id);
                changed = true;
            }
        }

        if changed {
            qb.push(" WHERE id = ")
                .push_bind(id)
                .push(" AND user_id = ")
                .push_bind(user.0);
            let affected = qb
                .build()
                .execute(&self.pool)
                .await
                .map_err(lead_conflict)?
                .rows_affected();
            if affected == 0 {
                return Err(Error::NotFound(Entity::Client));
            }
        }

        self.get_client(user, id).await
    }

    pub async fn delete_client(&self, user: ActingUser, id: i64) -> Result<()> {
        let affected = sqlx::query("DELETE FROM clients WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user.0)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(Error::NotFound(Entity::Client));
        }

        Ok(())
    }

    // Project operations

    pub async fn list_projects(&self, user: ActingUser) -> Result<Vec<ProjectWithClient>> {
        let projects = sqlx::query_as::<_, ProjectWithClient>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects p \
             JOIN clients c ON c.id = p.client_id \
             WHERE p.user_id = $1 ORDER BY p.created_at DESC"
        ))
        .bind(user.0)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    pub async fn get_project(&self, user: ActingUser, id: i64) -> Result<ProjectWithClient> {
        let project = sqlx::query_as::<_, ProjectWithClient>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects p \
             JOIN clients c ON c.id = p.client_id \
             WHERE p.id = $1 AND p.user_id = $2"
        ))
        .bind(id)
        .bind(user.0)
        .fetch_optional(&self.pool)
        .await?;

        project.ok_or(Error::NotFound(Entity::Project))
    }

    pub async fn create_project(
        &self,
        user: ActingUser,
        input: CreateProject,
    ) -> Result<ProjectWithClient> {
        self.ensure_client_owned(user, input.client_id).await?;
        let progress = input.progress.unwrap_or(0);
        validate_progress(progress)?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO projects (name, status, progress, due_date, client_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(input.name)
        .bind(input.status.unwrap_or(ProjectStatus::Planning).as_str())
        .bind(progress)
        .bind(input.due_date)
        .bind(input.client_id)
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        self.get_project(user, id).await
    }

    pub async fn update_project(
        &self,
        user: ActingUser,
        id: i64,
        input: UpdateProject,
    ) -> Result<ProjectWithClient> {
        if let Some(client_id) = input.client_id {
            self.ensure_client_owned(user, client_id).await?;
        }
        if let Some(progress) = input.progress {
            validate_progress(progress)?;
        }

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE projects SET ");
        let mut changed = false;
        {
            let mut sets = qb.separated(", ");
            if let Some(name) = input.name {
                sets.push("name = ").push_bind_unseparated(name);
                changed = true;
            }
            if let Some(status) = input.status {
                sets.push("status = ").push_bind_unseparated(status.as_str());
                changed = true;
            }
            if let Some(progress) = input.progress {
                sets.push("progress = ").push_bind_unseparated(progress);
                changed = true;
            }
            if let Some(due_date) = input.due_date {
                sets.push("due_date = ").push_bind_unseparated(due_date);
                changed = true;
            }
            if let Some(client_id) = input.client_id {
                sets.push("client_id = ").push_bind_unseparated(client_id);
                changed = true;
            }
        }

        if changed {
            qb.push(" WHERE id = ")
                .push_bind(id)
                .push(" AND user_id = ")
                .push_bind(user.0);
            let affected = qb.build().execute(&self.pool).await?.rows_affected();
            if affected == 0 {
                return Err(Error::NotFound(Entity::Project));
            }
        }

        self.get_project(user, id).await
    }

    pub async fn delete_project(&self, user: ActingUser, id: i64) -> Result<()> {
        let affected = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user.0)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(Error::NotFound(Entity::Project));
        }

        Ok(())
    }

    // Invoice operations

    pub async fn list_invoices(&self, user: ActingUser) -> Result<Vec<InvoiceWithRelated>> {
        let invoices = sqlx::query_as::<_, InvoiceWithRelated>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices i \
             JOIN clients c ON c.id = i.client_id \
             LEFT JOIN projects p ON p.id = i.project_id \
             WHERE i.user_id = $1 ORDER BY i.created_at DESC"
        ))
        .bind(user.0)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn get_invoice(&self, user: ActingUser, id: i64) -> Result<InvoiceWithRelated> {
        let invoice = sqlx::query_as::<_, InvoiceWithRelated>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices i \
             JOIN clients c ON c.id = i.client_id \
             LEFT JOIN projects p ON p.id = i.project_id \
             WHERE i.id = $1 AND i.user_id = $2"
        ))
        .bind(id)
        .bind(user.0)
        .fetch_optional(&self.pool)
        .await?;

        invoice.ok_or(Error::NotFound(Entity::Invoice))
    }

    pub async fn create_invoice(
        &self,
        user: ActingUser,
        input: CreateInvoice,
    ) -> Result<InvoiceWithRelated> {
        self.ensure_client_owned(user, input.client_id).await?;
        if let Some(project_id) = input.project_id {
            self.ensure_project_owned(user, project_id).await?;
        }
        validate_amount(input.amount)?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO invoices (number, date, amount, status, client_id, project_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(input.number)
        .bind(input.date)
        .bind(input.amount)
        .bind(input.status.unwrap_or(InvoiceStatus::Pending).as_str())
        .bind(input.client_id)
        .bind(input.project_id)
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        self.get_invoice(user, id).await
    }

    pub async fn update_invoice(
        &self,
        user: ActingUser,
        id: i64,
        input: UpdateInvoice,
    ) -> Result<InvoiceWithRelated> {
        if let Some(client_id) = input.client_id {
            self.ensure_client_owned(user, client_id).await?;
        }
        if let Some(Some(project_id)) = input.project_id {
            self.ensure_project_owned(user, project_id).await?;
        }
        if let Some(amount) = input.amount {
            validate_amount(amount)?;
        }

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE invoices SET ");
        let mut changed = false;
        {
            let mut sets = qb.separated(", ");
            if let Some(number) = input.number {
                sets.push("number = ").push_bind_unseparated(number);
                changed = true;
            }
            if let Some(date) = input.date {
                sets.push("date = ").push_bind_unseparated(date);
                changed = true;
            }
            if let Some(amount) = input.amount {
                sets.push("amount = ").push_bind_unseparated(amount);
                changed = true;
            }
            if let Some(status) = input.status {
                sets.push("status = ").push_bind_unseparated(status.as_str());
                changed = true;
            }
            if let Some(client_id) = input.client_id {
                sets.push("client_id = ").push_bind_unseparated(client_id);
                changed = true;
            }
            if let Some(project_id) = input.project_id {
                sets.push("project_id = ").push_bind_unseparated(project_id);
                changed = true;
            }
        }

        if changed {
            qb.push(" WHERE id = ")
                .push_bind(id)
                .push(" AND user_id = ")
                .push_bind(user.0);
            let affected = qb.build().execute(&self.pool).await?.rows_affected();
            if affected == 0 {
                return Err(Error::NotFound(Entity::Invoice));
            }
        }

        self.get_invoice(user, id).await
    }

    pub async fn update_invoice_status(
        &self,
        user: ActingUser,
        id: i64,
        status: InvoiceStatus,
    ) -> Result<InvoiceWithRelated> {
        let affected =
            sqlx::query("UPDATE invoices SET status = $1 WHERE id = $2 AND user_id = $3")
                .bind(status.as_str())
                .bind(id)
                .bind(user.0)
                .execute(&self.pool)
                .await?
                .rows_affected();

        if affected == 0 {
            return Err(Error::NotFound(Entity::Invoice));
        }

        self.get_invoice(user, id).await
    }

    pub async fn delete_invoice(&self, user: ActingUser, id: i64) -> Result<()> {
        let affected = sqlx::query("DELETE FROM invoices WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user.0)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(Error::NotFound(Entity::Invoice));
        }

        Ok(())
    }

    // Lead operations

    pub async fn list_leads(&self, user: ActingUser) -> Result<Vec<LeadWithClient>> {
        let leads = sqlx::query_as::<_, LeadWithClient>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads l \
             LEFT JOIN clients c ON c.lead_id = l.id \
             WHERE l.user_id = $1 ORDER BY l.created_at DESC"
        ))
        .bind(user.0)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    pub async fn get_lead(&self, user: ActingUser, id: i64) -> Result<LeadWithClient> {
        let lead = sqlx::query_as::<_, LeadWithClient>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads l \
             LEFT JOIN clients c ON c.lead_id = l.id \
             WHERE l.id = $1 AND l.user_id = $2"
        ))
        .bind(id)
        .bind(user.0)
        .fetch_optional(&self.pool)
        .await?;

        lead.ok_or(Error::NotFound(Entity::Lead))
    }

    pub async fn create_lead(&self, user: ActingUser, input: CreateLead) -> Result<Lead> {
        let value = input.value.unwrap_or(rust_decimal::Decimal::ZERO);
        validate_value(value)?;

        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads
                (title, company, contact_name, contact_email, contact_phone,
                 value, status, lead_type, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(input.title)
        .bind(input.company)
        .bind(input.contact_name)
        .bind(input.contact_email)
        .bind(input.contact_phone)
        .bind(value)
        .bind(input.status.unwrap_or(LeadStatus::New).as_str())
        .bind(input.lead_type)
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        Ok(lead)
    }

    pub async fn update_lead(
        &self,
        user: ActingUser,
        id: i64,
        input: UpdateLead,
    ) -> Result<LeadWithClient> {
        if let Some(value) = input.value {
            validate_value(value)?;
        }

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE leads SET ");
        let mut changed = false;
        {
            let mut sets = qb.separated(", ");
            if let Some(title) = input.title {
                sets.push("title = ").push_bind_unseparated(title);
                changed = true;
            }
            if let Some(company) = input.company {
                sets.push("company = ").push_bind_unseparated(company);
                changed = true;
            }
            if let Some(contact_name) = input.contact_name {
                sets.push("contact_name = ").push_bind_unseparated(contact_name);
                changed = true;
            }
            if let Some(contact_email) = input.contact_email {
                sets.push("contact_email = ").push_bind_unseparated(contact_email);
                changed = true;
            }
            if let Some(contact_phone) = input.contact_phone {
                sets.push("contact_phone = ").push_bind_unseparated(contact_phone);
                changed = true;
            }
            if let Some(value) = input.value {
                sets.push("value = ").push_bind_unseparated(value);
                changed = true;
            }
            if let Some(status) = input.status {
                sets.push("status = ").push_bind_unseparated(status.as_str());
                changed = true;
            }
            if let Some(lead_type) = input.lead_type {
                sets.push("lead_type = ").push_bind_unseparated(lead_type);
                changed = true;
            }
        }

        if changed {
            qb.push(" WHERE id = ")
                .push_bind(id)
                .push(" AND user_id = ")
                .push_bind(user.0);
            let affected = qb.build().execute(&self.pool).await?.rows_affected();
            if affected == 0 {
                return Err(Error::NotFound(Entity::Lead));
            }
        }

        self.get_lead(user, id).await
    }

    pub async fn update_lead_status(
        &self,
        user: ActingUser,
        id: i64,
        status: LeadStatus,
    ) -> Result<LeadWithClient> {
        let affected = sqlx::query("UPDATE leads SET status = $1 WHERE id = $2 AND user_id = $3")
            .bind(status.as_str())
            .bind(id)
            .bind(user.0)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(Error::NotFound(Entity::Lead));
        }

        self.get_lead(user, id).await
    }

    pub async fn delete_lead(&self, user: ActingUser, id: i64) -> Result<()> {
        let affected = sqlx::query("DELETE FROM leads WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user.0)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(Error::NotFound(Entity::Lead));
        }

        Ok(())
    }

    // Dashboard

    pub async fn dashboard_stats(&self, user: ActingUser) -> Result<DashboardSummary> {
        let clients_total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients WHERE user_id = $1")
                .bind(user.0)
                .fetch_one(&self.pool)
                .await?;

        let clients_active = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clients WHERE user_id = $1 AND status = 'Active'",
        )
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        let projects_active = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM projects WHERE user_id = $1 AND status = 'In Progress'",
        )
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        let invoices =
            sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE user_id = $1")
                .bind(user.0)
                .fetch_all(&self.pool)
                .await?;

        let leads = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE user_id = $1")
            .bind(user.0)
            .fetch_all(&self.pool)
            .await?;

        Ok(dashboard::summarize(
            clients_total,
            clients_active,
            projects_active,
            &invoices,
            &leads,
        ))
    }

    // Scoped existence checks for cross-entity references. A reference to
    // another user's row fails the same way a dangling one does.

    async fn ensure_client_owned(&self, user: ActingUser, client_id: i64) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1 AND user_id = $2)",
        )
        .bind(client_id)
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        if exists {
            Ok(())
        } else {
            Err(Error::Validation(
                "clientId does not reference one of your clients".to_string(),
            ))
        }
    }

    async fn ensure_project_owned(&self, user: ActingUser, project_id: i64) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1 AND user_id = $2)",
        )
        .bind(project_id)
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        if exists {
            Ok(())
        } else {
            Err(Error::Validation(
                "projectId does not reference one of your projects".to_string(),
            ))
        }
    }

    /// A lead can be linked by at most one client. Beyond the scoped
    /// ownership check, reject leads already converted into a client other
    /// than `exclude_client` (the client being updated, so re-submitting
    /// its own link is fine).
    async fn ensure_lead_available(
        &self,
        user: ActingUser,
        lead_id: i64,
        exclude_client: Option<i64>,
    ) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM leads WHERE id = $1 AND user_id = $2)",
        )
        .bind(lead_id)
        .bind(user.0)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(Error::Validation(
                "leadId does not reference one of your leads".to_string(),
            ));
        }

        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE lead_id = $1 AND id IS DISTINCT FROM $2)",
        )
        .bind(lead_id)
        .bind(exclude_client)
        .fetch_one(&self.pool)
        .await?;

        if taken {
            return Err(Error::Validation(
                "leadId is already linked to another client".to_string(),
            ));
        }

        Ok(())
    }
}

/// Translate a unique-constraint violation on `clients.lead_id` into the
/// same validation error the pre-flight check produces, so concurrent
/// conversions of one lead lose cleanly instead of surfacing a 500.
fn lead_conflict(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.constraint() == Some("clients_lead_id_key") {
            return Error::Validation("leadId is already linked to another client".to_string());
        }
    }
    Error::Database(err)
}

fn validate_progress(progress: i32) -> Result<()> {
    if (0..=100).contains(&progress) {
        Ok(())
    } else {
        Err(Error::Validation(
            "progress must be between 0 and 100".to_string(),
        ))
    }
}

fn validate_amount(amount: rust_decimal::Decimal) -> Result<()> {
    if amount.is_sign_negative() {
        Err(Error::Validation("amount must be non-negative".to_string()))
    } else {
        Ok(())
    }
}

fn validate_value(value: rust_decimal::Decimal) -> Result<()> {
    if value.is_sign_negative() {
        Err(Error::Validation("value must be non-negative".to_string()))
    } else {
        Ok(())
    }
}

/// Initialize the database connection pool and run pending migrations
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;

    sqlx::migrate!().run(db.get_pool()).await?;

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn progress_bounds() {
        assert!(validate_progress(0).is_ok());
        assert!(validate_progress(100).is_ok());
        assert!(validate_progress(-1).is_err());
        assert!(validate_progress(101).is_err());
    }

    #[test]
    fn monetary_fields_reject_negatives() {
        assert!(validate_amount(dec!(0)).is_ok());
        assert!(validate_amount(dec!(1200.50)).is_ok());
        assert!(validate_amount(dec!(-0.01)).is_err());
        assert!(validate_value(dec!(-5)).is_err());
    }
}
