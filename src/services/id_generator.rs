//! services/id_generator.rs
//! Ids de seguimiento: UUID v4 aleatorio (128 bits), imposible de adivinar.

use uuid::Uuid;

pub fn new_tracking_id() -> String {
    Uuid::new_v4().to_string()
}
