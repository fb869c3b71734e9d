//! Routes chat-style capture lines to their handlers.
//!
//! The route table is enumerated statically: each entry pairs an
//! anchored pattern with the handler it maps to, tried in order, first
//! match wins.

use crate::core::stanza::StanzaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::SessionStore;
use regex::{Regex, RegexBuilder};

/// Everything a routed command may touch: the open store and the
/// session pointer for the edit flow.
pub struct ChatContext<'a> {
    pub pool: &'a mut DbPool,
    pub sessions: &'a SessionStore,
}

type HandlerFn = fn(&mut ChatContext, Option<&str>) -> AppResult<String>;

struct Route {
    pattern: Regex,
    handler: HandlerFn,
}

fn pattern(re: &str, dotall: bool) -> Regex {
    RegexBuilder::new(re)
        .case_insensitive(true)
        .dot_matches_new_line(dotall)
        .build()
        .unwrap()
}

fn routes() -> Vec<Route> {
    vec![
        Route {
            pattern: pattern("^ping", false),
            handler: |_ctx, _| Ok(StanzaLogic::ping()),
        },
        Route {
            pattern: pattern("^show stanza (.*)", false),
            handler: |ctx, arg| StanzaLogic::show(ctx.pool, arg.unwrap_or("")),
        },
        Route {
            pattern: pattern("^save stanza (.*)", false),
            handler: |ctx, arg| StanzaLogic::save(ctx.pool, ctx.sessions, arg.unwrap_or("")),
        },
        Route {
            pattern: pattern("^edit stanza (.*)", false),
            handler: |ctx, arg| StanzaLogic::edit(ctx.pool, ctx.sessions, arg.unwrap_or("")),
        },
        Route {
            pattern: pattern("^done stanza", false),
            handler: |ctx, _| StanzaLogic::done(ctx.pool, ctx.sessions),
        },
        Route {
            // thoughts span multiple lines, so `.` must cross newlines here
            pattern: pattern("^thoughts (.*)", true),
            handler: |ctx, arg| StanzaLogic::thoughts(ctx.pool, ctx.sessions, arg.unwrap_or("")),
        },
        Route {
            pattern: pattern("^tags (.*)", false),
            handler: |ctx, arg| StanzaLogic::tags(ctx.pool, ctx.sessions, arg.unwrap_or("")),
        },
    ]
}

/// Routes one line to the first matching handler and returns its reply.
pub fn respond(ctx: &mut ChatContext, line: &str) -> AppResult<String> {
    for route in routes() {
        if let Some(caps) = route.pattern.captures(line) {
            let arg = caps.get(1).map(|m| m.as_str());
            return (route.handler)(ctx, arg);
        }
    }
    Ok(format!("Unknown command: {}", line))
}
