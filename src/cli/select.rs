//! `select` command

use super::print_json;
use anyhow::Result;
use clap::Args;
use switchyard_core::{CostSensitivity, RequestContext};
use switchyard_service::ModelRouter;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Request token count
    #[arg(long)]
    pub tokens: u64,
    /// Feature issuing the request
    #[arg(long)]
    pub feature: String,
    /// Tenant ID
    #[arg(long)]
    pub tenant: Option<String>,
    /// Cost sensitivity (low, medium, high)
    #[arg(long)]
    pub cost: Option<CostSensitivity>,
}

impl From<SelectArgs> for RequestContext {
    fn from(args: SelectArgs) -> Self {
        let mut context = RequestContext::new(args.tokens, args.feature);
        context.tenant_id = args.tenant;
        context.cost_sensitivity = args.cost;
        context
    }
}

pub async fn run(router: &ModelRouter, args: SelectArgs) -> Result<()> {
    let context = RequestContext::from(args);
    let decision = router.route(&context).await;
    print_json(&decision)
}
