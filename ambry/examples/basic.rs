//! Basic example of the Ambry container.

use ambry::{Bean, Component, SlotDescriptor, WiringError, global, submit_component, take_dependency};
use std::sync::Arc;

// === Define your components ===

struct Config {
    database_url: String,
}

impl Component for Config {
    fn component_name() -> &'static str {
        "config"
    }

    fn construct() -> Self {
        Config {
            database_url: "postgres://localhost/myapp".to_string(),
        }
    }
}

struct Database {
    config: Option<Arc<Config>>,
}

impl Database {
    fn query(&self, sql: &str) -> String {
        let url = self
            .config
            .as_ref()
            .map(|c| c.database_url.as_str())
            .unwrap_or("<unwired>");
        format!("[{url}] {sql}")
    }
}

impl Component for Database {
    fn dependency_slots() -> Vec<SlotDescriptor> {
        vec![SlotDescriptor::of::<Config>("config")]
    }

    fn construct() -> Self {
        Database { config: None }
    }

    fn assign(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError> {
        match slot {
            "config" => self.config = Some(take_dependency(slot, bean)?),
            other => return Err(WiringError::unknown_slot(other)),
        }
        Ok(())
    }
}

struct UserService {
    db: Option<Arc<Database>>,
}

impl UserService {
    fn find_user(&self, id: u64) -> String {
        match &self.db {
            Some(db) => db.query(&format!("SELECT * FROM users WHERE id = {id}")),
            None => "<unwired>".to_string(),
        }
    }
}

impl Component for UserService {
    fn component_name() -> &'static str {
        "userService"
    }

    fn dependency_slots() -> Vec<SlotDescriptor> {
        vec![SlotDescriptor::of::<Database>("db")]
    }

    fn construct() -> Self {
        UserService { db: None }
    }

    fn assign(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError> {
        match slot {
            "db" => self.db = Some(take_dependency(slot, bean)?),
            other => return Err(WiringError::unknown_slot(other)),
        }
        Ok(())
    }
}

// === Register them for link-time discovery ===

submit_component!(Config);
submit_component!(Database);
submit_component!(UserService);

fn main() -> ambry::Result<()> {
    // Initialize tracing (logging)
    tracing_subscriber::fmt()
        .with_env_filter("ambry=debug")
        .init();

    // First access builds the process-wide container from every
    // submitted component.
    let container = global()?;
    println!("container ready: {container:?}");

    // Lookup by type
    let users = container
        .get_by_type::<UserService>()
        .expect("UserService is registered");
    println!("{}", users.find_user(42));

    // Lookup by name
    let by_name = container
        .get_by_name("userService")
        .expect("named bean exists");
    let same: Arc<UserService> = by_name.downcast().expect("it is a UserService");
    println!("same instance: {}", Arc::ptr_eq(&users, &same));

    Ok(())
}
