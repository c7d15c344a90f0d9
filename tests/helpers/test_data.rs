//! Test data helpers for creating callers and boxes

use fake::{Fake, faker::company::en::CompanyName};
use stock_bot::models::Caller;

pub const ADMIN_ID: i64 = 1001;
pub const OPERATOR_ID: i64 = 2001;
pub const USER_ID: i64 = 3001;

pub fn admin() -> Caller {
    Caller::new(ADMIN_ID, Some("jefe".to_string()))
}

pub fn operator() -> Caller {
    Caller::new(OPERATOR_ID, Some("operario".to_string()))
}

pub fn operator_without_username() -> Caller {
    Caller::new(OPERATOR_ID, None)
}

pub fn plain_user() -> Caller {
    Caller::new(USER_ID, Some("visita".to_string()))
}

/// Random brand name that never contains "Acme"
pub fn fake_brand() -> String {
    loop {
        let brand: String = CompanyName().fake();
        if !brand.contains("Acme") {
            return brand;
        }
    }
}
