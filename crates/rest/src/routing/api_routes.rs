//! Route table of the REST API.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::api::RestApi;
use crate::handlers::{
    assets, balances, blockchains, exchanges, history, oracles, services, settings, system, tags,
    tasks, trades, users,
};
use crate::state::AppState;

/// Creates every REST API route, nested under the configured prefix.
///
/// # Routes
///
/// ## Settings and tasks
/// - `GET|PUT /settings`
/// - `GET /tasks`, `GET /tasks/{task_id}`
/// - `GET|PUT|DELETE /external_services`
/// - `GET|PUT|DELETE /queried_addresses`
///
/// ## Exchanges
/// - `GET /exchange_rates`
/// - `GET|PUT|DELETE /exchanges`
/// - `DELETE /exchanges/data[/{name}]`
/// - `GET /exchanges/balances[/{name}]`
///
/// ## Balances and blockchains
/// - `GET /balances`
/// - `GET /balances/blockchains[/{blockchain}]`
/// - `GET|PUT|PATCH|DELETE /balances/manual`
/// - `GET|DELETE /blockchains/ETH/transactions`, `GET /blockchains/ETH/transactions/{address}`
/// - `GET|PUT|PATCH|DELETE /blockchains/{blockchain}`
///
/// ## Trades, movements and ledger actions
/// - `GET|PUT|PATCH|DELETE /trades`
/// - `GET /asset_movements`
/// - `GET|PUT|PATCH|DELETE /ledgeractions`
/// - `GET|PUT|DELETE /actions/ignored`
///
/// ## Users and tags
/// - `GET|PUT|PATCH|DELETE /tags`
/// - `GET|PUT /users`
/// - `PATCH /users/{name}`, `PATCH /users/{name}/password`
///
/// ## Assets, history and oracles
/// - `GET|PUT|DELETE /assets/ignored`
/// - `GET|PUT|POST /assets/{asset}/icons/{size}`
/// - `GET /assets/prices/current`, `POST /assets/prices/historical`
/// - `GET /statistics/value_distribution`
/// - `GET /history`, `GET /history/export`
/// - `PUT|POST /import`
/// - `GET /oracles`, `GET|POST|DELETE /oracles/{oracle}/cache`
///
/// ## System
/// - `GET /version`
/// - `GET /ping`
pub fn create_routes<A>(state: AppState<A>) -> Router
where
    A: RestApi + 'static,
{
    let prefix = state.config().route_prefix().map(str::to_owned);

    let routes = Router::new()
        // Settings and tasks
        .route(
            "/settings",
            get(settings::get_settings_handler::<A>).put(settings::set_settings_handler::<A>),
        )
        .route("/tasks", get(tasks::query_tasks_handler::<A>))
        .route("/tasks/{task_id}", get(tasks::query_tasks_handler::<A>))
        .route(
            "/external_services",
            get(services::get_external_services_handler::<A>)
                .put(services::add_external_services_handler::<A>)
                .delete(services::delete_external_services_handler::<A>),
        )
        .route(
            "/queried_addresses",
            get(services::get_queried_addresses_handler::<A>)
                .put(services::add_queried_address_handler::<A>)
                .delete(services::remove_queried_address_handler::<A>),
        )
        // Exchanges
        .route(
            "/exchange_rates",
            get(exchanges::exchange_rates_handler::<A>),
        )
        .route(
            "/exchanges",
            get(exchanges::get_exchanges_handler::<A>)
                .put(exchanges::setup_exchange_handler::<A>)
                .delete(exchanges::remove_exchange_handler::<A>),
        )
        .route(
            "/exchanges/data",
            delete(exchanges::purge_exchange_data_handler::<A>),
        )
        .route(
            "/exchanges/data/{name}",
            delete(exchanges::purge_exchange_data_handler::<A>),
        )
        .route(
            "/exchanges/balances",
            get(exchanges::exchange_balances_handler::<A>),
        )
        .route(
            "/exchanges/balances/{name}",
            get(exchanges::exchange_balances_handler::<A>),
        )
        // Balances
        .route("/balances", get(balances::all_balances_handler::<A>))
        .route(
            "/balances/blockchains",
            get(balances::blockchain_balances_handler::<A>),
        )
        .route(
            "/balances/blockchains/{blockchain}",
            get(balances::blockchain_balances_handler::<A>),
        )
        .route(
            "/balances/manual",
            get(balances::get_manual_balances_handler::<A>)
                .put(balances::add_manual_balances_handler::<A>)
                .patch(balances::edit_manual_balances_handler::<A>)
                .delete(balances::remove_manual_balances_handler::<A>),
        )
        // Blockchains
        .route(
            "/blockchains/ETH/transactions",
            get(blockchains::get_transactions_handler::<A>)
                .delete(blockchains::purge_transactions_handler::<A>),
        )
        .route(
            "/blockchains/ETH/transactions/{address}",
            get(blockchains::get_transactions_handler::<A>),
        )
        .route(
            "/blockchains/{blockchain}",
            get(blockchains::get_accounts_handler::<A>)
                .put(blockchains::add_accounts_handler::<A>)
                .patch(blockchains::edit_accounts_handler::<A>)
                .delete(blockchains::remove_accounts_handler::<A>),
        )
        // Trades, asset movements and ledger actions
        .route(
            "/trades",
            get(trades::get_trades_handler::<A>)
                .put(trades::add_trade_handler::<A>)
                .patch(trades::edit_trade_handler::<A>)
                .delete(trades::delete_trade_handler::<A>),
        )
        .route(
            "/asset_movements",
            get(trades::get_asset_movements_handler::<A>),
        )
        .route(
            "/ledgeractions",
            get(trades::get_ledger_actions_handler::<A>)
                .put(trades::add_ledger_action_handler::<A>)
                .patch(trades::edit_ledger_action_handler::<A>)
                .delete(trades::delete_ledger_action_handler::<A>),
        )
        .route(
            "/actions/ignored",
            get(trades::get_ignored_actions_handler::<A>)
                .put(trades::add_ignored_actions_handler::<A>)
                .delete(trades::remove_ignored_actions_handler::<A>),
        )
        // Tags and users
        .route(
            "/tags",
            get(tags::get_tags_handler::<A>)
                .put(tags::add_tag_handler::<A>)
                .patch(tags::edit_tag_handler::<A>)
                .delete(tags::delete_tag_handler::<A>),
        )
        .route(
            "/users",
            get(users::get_users_handler::<A>).put(users::create_user_handler::<A>),
        )
        .route("/users/{name}", patch(users::user_action_handler::<A>))
        .route(
            "/users/{name}/password",
            patch(users::change_password_handler::<A>),
        )
        // Assets
        .route(
            "/assets/ignored",
            get(assets::get_ignored_assets_handler::<A>)
                .put(assets::add_ignored_assets_handler::<A>)
                .delete(assets::remove_ignored_assets_handler::<A>),
        )
        .route(
            "/assets/{asset}/icons/{size}",
            get(assets::get_asset_icon_handler::<A>)
                .put(assets::set_asset_icon_handler::<A>)
                .post(assets::upload_asset_icon_handler::<A>),
        )
        .route(
            "/assets/prices/current",
            get(assets::current_prices_handler::<A>),
        )
        .route(
            "/assets/prices/historical",
            post(assets::historical_prices_handler::<A>),
        )
        // Statistics, history and imports
        .route(
            "/statistics/value_distribution",
            get(history::value_distribution_handler::<A>),
        )
        .route("/history", get(history::process_history_handler::<A>))
        .route("/history/export", get(history::export_history_handler::<A>))
        .route(
            "/import",
            put(history::import_path_handler::<A>).post(history::import_upload_handler::<A>),
        )
        // Oracles
        .route("/oracles", get(oracles::get_oracles_handler::<A>))
        .route(
            "/oracles/{oracle}/cache",
            get(oracles::get_oracle_cache_handler::<A>)
                .post(oracles::create_oracle_cache_handler::<A>)
                .delete(oracles::delete_oracle_cache_handler::<A>),
        )
        // System
        .route("/version", get(system::version_handler::<A>))
        .route("/ping", get(system::ping_handler::<A>))
        .with_state(state);

    match prefix {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    }
}
