//! Staff bearer-token middleware and role guards.

use std::sync::Arc;

use gearlock::roles::Role;
use gearlock_app::domain::staff::StaffServiceError;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{error, warn};

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let member = match state.app.staff.authenticate(token).await {
        Ok(member) => member,
        Err(StaffServiceError::NotFound | StaffServiceError::Token(_)) => {
            res.render(StatusError::unauthorized().brief("Invalid staff token"));
            ctrl.skip_rest();

            return;
        }
        Err(
            error @ (StaffServiceError::MissingName
            | StaffServiceError::InvalidData
            | StaffServiceError::Sql(_)),
        ) => {
            error!("failed to authenticate staff token: {error}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_staff_member(member);

    ctrl.call_next(req, depot, res).await;
}

/// Only lets through staff who may manage orders.
#[salvo::handler]
pub(crate) async fn require_order_manager(
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    guard(depot, res, ctrl, Role::can_manage_orders);
}

/// Only lets through staff who may manage the catalog.
#[salvo::handler]
pub(crate) async fn require_catalog_manager(
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    guard(depot, res, ctrl, Role::can_manage_catalog);
}

fn guard(depot: &Depot, res: &mut Response, ctrl: &mut FlowCtrl, allowed: fn(Role) -> bool) {
    match depot.staff_member_or_401() {
        Ok(member) if allowed(member.role) => {}
        Ok(member) => {
            warn!(staff = %member.uuid, role = %member.role, "staff role refused");

            res.render(StatusError::forbidden().brief("Insufficient role"));
            ctrl.skip_rest();
        }
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();
        }
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
