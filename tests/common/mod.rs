#![allow(dead_code)]

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use staffdesk::db::{ConnectionOptions, DbConnection, DbPool, establish_connection_pool};
use staffdesk::domain::staff::StaffIdentity;
use staffdesk::domain::types::{StaffId, StaffLevel};
use staffdesk::schema::{staff, staff_tickets, tickets};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(
            path.to_str().expect("utf-8 temp path"),
            ConnectionOptions::default(),
        )
        .expect("create pool");

        let mut pooled = pool.get().expect("get connection");
        let conn: &mut SqliteConnection = &mut pooled;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        drop(pooled);

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn conn(&self) -> DbConnection {
        self.pool.get().expect("get connection")
    }

    /// Inserts a staff member and returns the matching identity.
    pub fn staff(&self, email: &str, level: StaffLevel) -> StaffIdentity {
        let id = diesel::insert_into(staff::table)
            .values((
                staff::email.eq(email),
                staff::name.eq(email),
                staff::level.eq(i32::from(level)),
            ))
            .returning(staff::id)
            .get_result::<i32>(&mut self.conn())
            .expect("insert staff");

        StaffIdentity {
            id: StaffId::new(id).expect("positive id"),
            email: email.to_string(),
            name: email.to_string(),
            level,
        }
    }

    /// Inserts a ticket and returns its id.
    pub fn ticket(&self, number: i32, title: &str, department_id: i32, closed: bool) -> i32 {
        diesel::insert_into(tickets::table)
            .values((
                tickets::ticket_number.eq(number),
                tickets::title.eq(title),
                tickets::department_id.eq(department_id),
                tickets::closed.eq(closed),
            ))
            .returning(tickets::id)
            .get_result::<i32>(&mut self.conn())
            .expect("insert ticket")
    }

    /// Makes a ticket visible to a staff member.
    pub fn share(&self, staff: &StaffIdentity, ticket_id: i32) {
        diesel::insert_into(staff_tickets::table)
            .values((
                staff_tickets::staff_id.eq(staff.id.get()),
                staff_tickets::ticket_id.eq(ticket_id),
            ))
            .execute(&mut self.conn())
            .expect("share ticket");
    }
}
