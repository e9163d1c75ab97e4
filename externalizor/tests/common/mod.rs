//! Shared fixtures for plan and facade tests.

#![allow(dead_code)]

use externalizor::{
    AccessMode, Externalizable, ExternalizerFactory, FieldAccessor, FieldRegistrar,
};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Externalizable for Point {
    fn blank() -> Self {
        Self::default()
    }

    fn describe(fields: &mut FieldRegistrar<Self>) {
        fields
            .field("x", |p| p.x, |p, v| p.x = v)
            .field("y", |p| p.y, |p, v| p.y = v);
    }
}

/// One field of every primitive kind plus two references.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub nickname: Option<String>,
    pub balance: f64,
    pub rate: f32,
    pub active: bool,
    pub tier: i8,
    pub level: i16,
    pub visits: i32,
    pub initial: u16,
}

impl Externalizable for Account {
    fn blank() -> Self {
        Self::default()
    }

    fn describe(fields: &mut FieldRegistrar<Self>) {
        fields
            .field("id", |a| a.id, |a, v| a.id = v)
            .field("owner", |a| a.owner.clone(), |a, v| a.owner = v)
            .field("nickname", |a| a.nickname.clone(), |a, v| a.nickname = v)
            .field("balance", |a| a.balance, |a, v| a.balance = v)
            .field("rate", |a| a.rate, |a, v| a.rate = v)
            .field("active", |a| a.active, |a, v| a.active = v)
            .field("tier", |a| a.tier, |a, v| a.tier = v)
            .field("level", |a| a.level, |a, v| a.level = v)
            .field("visits", |a| a.visits, |a, v| a.visits = v)
            .field("initial", |a| a.initial, |a, v| a.initial = v);
    }
}

/// Carries a derived checksum that is written but never read back.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Receipt {
    pub total: i64,
    pub items: i32,
}

impl Externalizable for Receipt {
    fn blank() -> Self {
        Self::default()
    }

    fn describe(fields: &mut FieldRegistrar<Self>) {
        fields
            .field("total", |r| r.total, |r, v| r.total = v)
            .field("items", |r| r.items, |r, v| r.items = v)
            .write_only("checksum", |r| r.total ^ i64::from(r.items));
    }
}

/// Declares no fields at all.
#[derive(Debug, Default)]
pub struct Hollow;

impl Externalizable for Hollow {
    fn blank() -> Self {
        Self
    }

    fn describe(_fields: &mut FieldRegistrar<Self>) {}
}

/// Registers the same field name twice.
#[derive(Debug, Default)]
pub struct Twice {
    pub a: i32,
}

impl Externalizable for Twice {
    fn blank() -> Self {
        Self::default()
    }

    fn describe(fields: &mut FieldRegistrar<Self>) {
        fields
            .field("a", |t| t.a, |t, v| t.a = v)
            .field("a", |t| t.a, |t, v| t.a = v);
    }
}

/// Registers an externalizer built for another type.
#[derive(Debug, Default)]
pub struct Borrower {
    pub a: i32,
}

impl Externalizable for Borrower {
    fn blank() -> Self {
        Self::default()
    }

    fn describe(fields: &mut FieldRegistrar<Self>) {
        let foreign = FieldAccessor::new::<Point>("x", |p| p.x, |p, v| p.x = v);
        if let Some(externalizer) = ExternalizerFactory::primitive(foreign).into_primitive() {
            fields.custom(externalizer);
        }
    }
}

/// Uses a caller-built externalizer for its only field.
#[derive(Debug, Default, PartialEq)]
pub struct Tagged {
    pub tag: String,
}

impl Externalizable for Tagged {
    fn blank() -> Self {
        Self::default()
    }

    fn describe(fields: &mut FieldRegistrar<Self>) {
        let accessor = FieldAccessor::new::<Tagged>("tag", |t| t.tag.clone(), |t, v| t.tag = v);
        fields.custom(Box::new(externalizor::ReferenceFieldExternalizer::new(
            accessor,
            AccessMode::ReadWrite,
        )));
    }
}

pub fn sample_account() -> Account {
    Account {
        id: -42,
        owner: "Ada".into(),
        nickname: Some("countess".into()),
        balance: 1234.5,
        rate: -0.0,
        active: true,
        tier: -3,
        level: 512,
        visits: i32::MAX,
        initial: 'A' as u16,
    }
}
