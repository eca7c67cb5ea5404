use std::{env, str::FromStr};

use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub admin: Admin,
    pub checkout: Checkout,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}

/// Paging limits for the admin list endpoints.
#[derive(Debug, Clone)]
pub struct Admin {
    pub page_size: i64,
    pub max_page_size: i64,
}

#[derive(Debug, Clone)]
pub struct Checkout {
    pub delivery_fee: Decimal,
    /// Fraction of the subtotal, e.g. `0.16`.
    pub tax_rate: Decimal,
    pub delivery_days: i64,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_page_size: 500,
        }
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self {
            delivery_fee: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            delivery_days: 3,
        }
    }
}

/// Reads the configuration from the process environment.
pub fn load() -> Result<Config> {
    let database = Database {
        url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
        max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 10)?,
    };

    let server = Server {
        host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: parse_or("SERVER_PORT", 3000)?,
    };

    let defaults = Admin::default();
    let admin = Admin {
        page_size: parse_or("ADMIN_PAGE_SIZE", defaults.page_size)?,
        max_page_size: parse_or("ADMIN_MAX_PAGE_SIZE", defaults.max_page_size)?,
    };
    if admin.page_size < 1 || admin.page_size > admin.max_page_size {
        return Err(anyhow!(
            "ADMIN_PAGE_SIZE must be between 1 and ADMIN_MAX_PAGE_SIZE ({})",
            admin.max_page_size
        ));
    }

    let defaults = Checkout::default();
    let checkout = Checkout {
        delivery_fee: parse_or("CHECKOUT_DELIVERY_FEE", defaults.delivery_fee)?,
        tax_rate: parse_or("CHECKOUT_TAX_RATE", defaults.tax_rate)?,
        delivery_days: parse_or("CHECKOUT_DELIVERY_DAYS", defaults.delivery_days)?,
    };
    if checkout.delivery_fee.is_sign_negative() || checkout.tax_rate.is_sign_negative() {
        return Err(anyhow!("Checkout fees and rates must not be negative"));
    }

    Ok(Config {
        server,
        database,
        admin,
        checkout,
    })
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|err| anyhow!("Invalid value for {}: {} ({})", key, raw, err)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let admin = Admin::default();
        assert_eq!(admin.page_size, 100);
        assert_eq!(admin.max_page_size, 500);

        let checkout = Checkout::default();
        assert_eq!(checkout.delivery_days, 3);
        assert!(checkout.tax_rate.is_zero());
    }

    #[test]
    fn parse_or_falls_back_when_unset() {
        let value: u16 = parse_or("AGRIMARKET_TEST_SURELY_UNSET_KEY", 42).unwrap();
        assert_eq!(value, 42);
    }
}
