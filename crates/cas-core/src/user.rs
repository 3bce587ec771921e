//! # User Types
//!
//! User accounts: admins manage stock, customers browse and buy.
//!
//! The original system modelled `Admin` and `Customer` as subclasses and
//! `Address` as a private inner class. Here the role is a closed enum with
//! the customer's basket as its payload, and `Address` is a plain value
//! struct owned by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::basket::Basket;
use crate::error::CoreResult;
use crate::validation::{
    validate_city, validate_house_number, validate_postcode, validate_surname, validate_user_id,
    validate_username,
};

// =============================================================================
// Address
// =============================================================================

/// A postal address, owned exclusively by a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    house_number: u32,
    city: String,
    postcode: String,
}

impl Address {
    /// Creates an address, validating every field.
    pub fn new(
        house_number: u32,
        city: impl Into<String>,
        postcode: impl Into<String>,
    ) -> CoreResult<Self> {
        let city = city.into();
        let postcode = postcode.into();

        validate_house_number(house_number)?;
        validate_city(&city)?;
        validate_postcode(&postcode)?;

        Ok(Address {
            house_number,
            city,
            postcode,
        })
    }

    #[inline]
    pub const fn house_number(&self) -> u32 {
        self.house_number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }
}

// =============================================================================
// Role
// =============================================================================

/// What a user account can do.
///
/// - `Admin` accounts manage stock and see original costs.
/// - `Customer` accounts own exactly one session-lived [`Basket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "role")]
pub enum Role {
    Admin,
    Customer { basket: Basket },
}

impl Role {
    /// The lowercase name used in the user accounts file.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer { .. } => "customer",
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A user of the system.
///
/// Identity fields are immutable after construction; a customer's basket
/// is the only mutable state and lives for the session only (it is never
/// persisted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: u32,
    username: String,
    surname: String,
    address: Address,
    #[serde(flatten)]
    role: Role,
}

impl User {
    /// Creates an admin account, validating every field.
    pub fn admin(
        id: u32,
        username: impl Into<String>,
        surname: impl Into<String>,
        house_number: u32,
        city: impl Into<String>,
        postcode: impl Into<String>,
    ) -> CoreResult<Self> {
        User::new(id, username.into(), surname.into(), house_number, city.into(), postcode.into(), Role::Admin)
    }

    /// Creates a customer account with an empty basket.
    pub fn customer(
        id: u32,
        username: impl Into<String>,
        surname: impl Into<String>,
        house_number: u32,
        city: impl Into<String>,
        postcode: impl Into<String>,
    ) -> CoreResult<Self> {
        User::new(
            id,
            username.into(),
            surname.into(),
            house_number,
            city.into(),
            postcode.into(),
            Role::Customer {
                basket: Basket::new(),
            },
        )
    }

    fn new(
        id: u32,
        username: String,
        surname: String,
        house_number: u32,
        city: String,
        postcode: String,
        role: Role,
    ) -> CoreResult<Self> {
        validate_user_id(id)?;
        validate_username(&username)?;
        validate_surname(&surname)?;
        let address = Address::new(house_number, city, postcode)?;

        Ok(User {
            id,
            username,
            surname,
            address,
            role,
        })
    }

    // Getters.

    #[inline]
    pub const fn id(&self) -> u32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    #[inline]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    pub fn postcode(&self) -> &str {
        self.address.postcode()
    }

    #[inline]
    pub const fn role(&self) -> &Role {
        &self.role
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// The customer's basket, if this user is a customer.
    pub fn basket(&self) -> Option<&Basket> {
        match &self.role {
            Role::Customer { basket } => Some(basket),
            Role::Admin => None,
        }
    }

    /// Mutable access to the customer's basket, if this user is a customer.
    pub fn basket_mut(&mut self) -> Option<&mut Basket> {
        match &mut self.role {
            Role::Customer { basket } => Some(basket),
            Role::Admin => None,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Username: {}, Surname: {}, House Number: {}, City: {}, Postcode: {}",
            self.id,
            self.username,
            self.surname,
            self.address.house_number(),
            self.address.city(),
            self.address.postcode()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
