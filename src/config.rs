/*
 * Responsibility
 * - 環境変数の読み込み (PORT)
 * - PORT が無い / 数値でない場合は既定ポートにフォールバック
 */
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 2000;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
        }
    }
}
