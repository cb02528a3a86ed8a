pub mod auth;
pub mod guard;
pub mod usecase;

use birthdays_domain::ID;

/// Ids without duplicates, in request order
pub fn unique_ids(ids: impl IntoIterator<Item = ID>) -> Vec<ID> {
    let mut unique: Vec<ID> = Vec::new();
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
