//! Operation registry and dispatch
//!
//! Every externally callable operation is a variant of [`Operation`]. The
//! route table, the OpenAPI document and [`Dispatcher::invoke`] all key off
//! the same enum, so an operation cannot be routed without a handler.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::Instrument;
use utoipa::ToSchema;

use super::error::CatalogError;
use super::models::{Product, ProductId, SupplierId};
use super::service::CatalogService;

/// Entity sets an operation can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum EntitySet {
    Products,
    Suppliers,
}

/// Actions mutate, functions only read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Action,
    Function,
}

impl OperationKind {
    pub fn http_method(self) -> &'static str {
        match self {
            Self::Action => "POST",
            Self::Function => "GET",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Unbound,
    Bound(EntitySet),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SubmitOrder,
    Discontinue,
    RandomProduct,
    AddressLine,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::SubmitOrder,
        Operation::Discontinue,
        Operation::RandomProduct,
        Operation::AddressLine,
    ];

    /// External operation name
    pub fn name(self) -> &'static str {
        match self {
            Self::SubmitOrder => "submitOrder",
            Self::Discontinue => "discontinue",
            Self::RandomProduct => "randomProduct",
            Self::AddressLine => "addressLine",
        }
    }

    pub fn kind(self) -> OperationKind {
        match self {
            Self::SubmitOrder | Self::Discontinue => OperationKind::Action,
            Self::RandomProduct | Self::AddressLine => OperationKind::Function,
        }
    }

    pub fn binding(self) -> Binding {
        match self {
            Self::SubmitOrder | Self::RandomProduct => Binding::Unbound,
            Self::Discontinue => Binding::Bound(EntitySet::Products),
            Self::AddressLine => Binding::Bound(EntitySet::Suppliers),
        }
    }

    /// Route path relative to the catalog service root
    pub fn path(self) -> &'static str {
        match self {
            Self::SubmitOrder => "/submitOrder",
            Self::Discontinue => "/Products/{id}/discontinue",
            Self::RandomProduct => "/randomProduct",
            Self::AddressLine => "/Suppliers/{id}/addressLine",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// A call to one operation with its typed parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    SubmitOrder {
        product: ProductId,
        quantity: i32,
    },
    Discontinue {
        product: ProductId,
    },
    RandomProduct,
    AddressLine {
        supplier: SupplierId,
    },
}

impl Invocation {
    pub fn operation(&self) -> Operation {
        match self {
            Self::SubmitOrder { .. } => Operation::SubmitOrder,
            Self::Discontinue { .. } => Operation::Discontinue,
            Self::RandomProduct => Operation::RandomProduct,
            Self::AddressLine { .. } => Operation::AddressLine,
        }
    }
}

/// Operation result; serializes as the bare value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// `submitOrder`: stock left after the order
    NewStock(i32),
    /// `discontinue`, `randomProduct`
    Product(Product),
    /// `addressLine`
    AddressLine(String),
}

/// Describes one registered operation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OperationInfo {
    #[schema(example = "submitOrder")]
    pub name: String,
    pub kind: OperationKind,
    /// Entity set for bound operations
    pub bound_to: Option<EntitySet>,
    #[schema(example = "POST")]
    pub method: String,
    #[schema(example = "/submitOrder")]
    pub path: String,
}

impl From<Operation> for OperationInfo {
    fn from(op: Operation) -> Self {
        let bound_to = match op.binding() {
            Binding::Unbound => None,
            Binding::Bound(entity) => Some(entity),
        };
        Self {
            name: op.name().to_string(),
            kind: op.kind(),
            bound_to,
            method: op.kind().http_method().to_string(),
            path: op.path().to_string(),
        }
    }
}

/// Routes invocations to [`CatalogService`]
#[derive(Clone)]
pub struct Dispatcher {
    service: CatalogService,
}

impl Dispatcher {
    pub fn new(service: CatalogService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &CatalogService {
        &self.service
    }

    pub fn operations(&self) -> Vec<OperationInfo> {
        Operation::ALL.into_iter().map(OperationInfo::from).collect()
    }

    pub async fn invoke(&self, invocation: Invocation) -> Result<Outcome, CatalogError> {
        let op = invocation.operation();
        let span = tracing::info_span!(
            "op",
            name = op.name(),
            store = self.service.store_name()
        );

        let result = async {
            match invocation {
                Invocation::SubmitOrder { product, quantity } => self
                    .service
                    .submit_order(product, quantity)
                    .await
                    .map(Outcome::NewStock),
                Invocation::Discontinue { product } => {
                    self.service.discontinue(product).await.map(Outcome::Product)
                }
                Invocation::RandomProduct => {
                    self.service.random_product().await.map(Outcome::Product)
                }
                Invocation::AddressLine { supplier } => self
                    .service
                    .address_line(supplier)
                    .await
                    .map(Outcome::AddressLine),
            }
        }
        .instrument(span.clone())
        .await;

        if let Err(ref e) = result {
            span.in_scope(|| tracing::debug!("Operation failed: {}", e));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures;
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(CatalogService::new(Arc::new(fixtures::catalog(10))))
    }

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
        assert_eq!(
            "SubmitOrder".parse::<Operation>(),
            Err(UnknownOperation("SubmitOrder".to_string()))
        );
    }

    #[test]
    fn test_bound_operations_take_a_key() {
        for op in Operation::ALL {
            let has_key = op.path().contains("{id}");
            assert_eq!(has_key, matches!(op.binding(), Binding::Bound(_)), "{}", op);
        }
    }

    #[test]
    fn test_kinds_and_methods() {
        assert_eq!(Operation::SubmitOrder.kind(), OperationKind::Action);
        assert_eq!(Operation::Discontinue.kind().http_method(), "POST");
        assert_eq!(Operation::RandomProduct.kind().http_method(), "GET");
        assert_eq!(
            Operation::AddressLine.binding(),
            Binding::Bound(EntitySet::Suppliers)
        );
    }

    #[test]
    fn test_outcome_serializes_bare() {
        assert_eq!(serde_json::to_string(&Outcome::NewStock(15)).unwrap(), "15");
        assert_eq!(
            serde_json::to_string(&Outcome::AddressLine("a, b, c, d".into())).unwrap(),
            "\"a, b, c, d\""
        );
    }

    #[tokio::test]
    async fn test_invoke_each_operation() {
        let dispatcher = dispatcher();

        let out = dispatcher
            .invoke(Invocation::SubmitOrder {
                product: 7,
                quantity: 5,
            })
            .await
            .unwrap();
        assert_eq!(out, Outcome::NewStock(15));

        match dispatcher
            .invoke(Invocation::Discontinue { product: 7 })
            .await
            .unwrap()
        {
            Outcome::Product(p) => assert!(p.discontinued && p.units_in_stock == 0),
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert!(matches!(
            dispatcher.invoke(Invocation::RandomProduct).await.unwrap(),
            Outcome::Product(_)
        ));

        assert_eq!(
            dispatcher
                .invoke(Invocation::AddressLine { supplier: 3 })
                .await
                .unwrap(),
            Outcome::AddressLine("221B Baker St, London, NW16XE, UK".to_string())
        );
    }

    #[tokio::test]
    async fn test_invoke_propagates_errors() {
        let err = dispatcher()
            .invoke(Invocation::AddressLine { supplier: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SupplierNotFound(1)));
    }

    #[test]
    fn test_operation_listing() {
        let ops = dispatcher().operations();
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0].name, "submitOrder");
        assert_eq!(ops[0].method, "POST");
        assert_eq!(ops[0].bound_to, None);
        assert_eq!(ops[3].path, "/Suppliers/{id}/addressLine");
        assert_eq!(ops[3].bound_to, Some(EntitySet::Suppliers));
    }
}
