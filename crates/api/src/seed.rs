//! Startup seeding with a randomly generated customer.

use clientele_core::customer::{Customer, CustomerRegistrationRequest};
use clientele_core::error::CoreError;
use clientele_core::service::CustomerService;
use rand::seq::IndexedRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jamila", "George", "Daniel", "Ann", "Maria", "Omar", "Lena", "Tomas", "Priya",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Haddad", "Novak", "Garcia", "Okafor", "Tanaka", "Larsen", "Rossi", "Kowalski",
];

/// Build a registration request for a random person aged 16..99.
pub fn random_registration<R: Rng + ?Sized>(rng: &mut R) -> CustomerRegistrationRequest {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
    let age = rng.random_range(16..99);

    CustomerRegistrationRequest {
        name: format!("{first} {last}"),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        age,
    }
}

/// Register one random customer.
///
/// Returns `Ok(None)` when the generated email is already taken.
pub async fn seed_random_customer(
    service: &CustomerService,
) -> Result<Option<Customer>, CoreError> {
    let request = random_registration(&mut rand::rng());
    match service.register_customer(request).await {
        Ok(customer) => Ok(Some(customer)),
        Err(CoreError::Duplicate(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
