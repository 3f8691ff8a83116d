//! Quota enforcement backed by a fixed-window counter in Redis.
//!
//! The limiter is built once at startup when `REDIS_URL` is configured and
//! handed to handlers through [`AppState`](crate::state::AppState).

use async_trait::async_trait;
use logoforge_core::quota::{QuotaDecision, QUOTA_LIMIT, QUOTA_WINDOW_SECS};
use redis::aio::ConnectionManager;
use redis::Script;

/// FIXED_WINDOW_SCRIPT atomically checks and increments a fixed-window
/// counter.
///
/// KEYS[1]: counter key
/// ARGV[1]: limit
/// ARGV[2]: window seconds
/// ARGV[3]: now (Unix epoch seconds)
///
/// Returns: {allowed (0/1), remaining}
const FIXED_WINDOW_SCRIPT: &str = r#"
local key = KEYS[1]
local limit = tonumber(ARGV[1])
local window = tonumber(ARGV[2])
local now = tonumber(ARGV[3])

local window_key = key .. ':' .. tostring(math.floor(now / window))
local count = tonumber(redis.call('GET', window_key) or '0')

if count < limit then
    redis.call('INCR', window_key)
    redis.call('EXPIRE', window_key, window)
    return {1, limit - count - 1}
end

return {0, 0}
"#;

/// Errors from the rate-limit store.
#[derive(Debug, thiserror::Error)]
pub enum QuotaError {
    #[error("Rate-limit store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("Unexpected rate-limit script reply: {0:?}")]
    UnexpectedReply(Vec<i64>),
}

/// Capability: consume one unit for a key within the configured window.
#[async_trait]
pub trait QuotaLimiter: Send + Sync {
    async fn consume(&self, key: &str) -> Result<QuotaDecision, QuotaError>;
}

/// Redis fixed-window limiter.
pub struct RedisQuotaLimiter {
    conn: ConnectionManager,
    limit: u32,
    window_secs: u64,
}

impl RedisQuotaLimiter {
    /// Connect to `redis_url` with the standard allowance
    /// ([`QUOTA_LIMIT`] per [`QUOTA_WINDOW_SECS`]).
    pub async fn connect(redis_url: &str) -> Result<Self, QuotaError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self::new(conn, QUOTA_LIMIT, QUOTA_WINDOW_SECS))
    }

    pub fn new(conn: ConnectionManager, limit: u32, window_secs: u64) -> Self {
        Self {
            conn,
            limit,
            window_secs,
        }
    }
}

#[async_trait]
impl QuotaLimiter for RedisQuotaLimiter {
    async fn consume(&self, key: &str) -> Result<QuotaDecision, QuotaError> {
        let now = chrono::Utc::now().timestamp();
        let script = Script::new(FIXED_WINDOW_SCRIPT);
        let result: Vec<i64> = script
            .key(key)
            .arg(self.limit)
            .arg(self.window_secs)
            .arg(now)
            .invoke_async(&mut self.conn.clone())
            .await?;

        parse_reply(result)
    }
}

/// Turn the script's `{allowed, remaining}` reply into a decision.
fn parse_reply(reply: Vec<i64>) -> Result<QuotaDecision, QuotaError> {
    let remaining = match reply.as_slice() {
        [1, remaining] => u32::try_from(*remaining).ok(),
        [0, _] => return Ok(QuotaDecision::denied()),
        _ => None,
    };
    remaining
        .map(QuotaDecision::allowed)
        .ok_or(QuotaError::UnexpectedReply(reply))
}
