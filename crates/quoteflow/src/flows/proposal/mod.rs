//! The quote builder flow: static catalog, pure pricing, the builder reducer,
//! and the submission boundary behind store/CRM traits.

pub mod builder;
pub mod catalog;
pub mod domain;
pub mod pricing;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use builder::{reduce, BuilderAction, BuilderState, BuilderStep};
pub use catalog::ServiceCatalog;
pub use domain::{
    BillingMode, CustomLineItem, Discount, PackageInfo, PackageView, ProposalId, SelectedService,
    ServiceItem, ServiceView, SubmissionReceipt, Totals,
};
pub use repository::{ProposalRecord, ProposalSnapshot, ProposalStore};
pub use router::proposal_router;
pub use service::{
    CustomItemRequest, ProposalRequest, ProposalService, ProposalServiceError,
    ServiceSelectionRequest, ValidationError,
};
