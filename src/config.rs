//! エンジン設定管理モジュール
//! 自動対戦相手の遅延や評価パラメータを
//! 設定ファイルと環境変数から読み込んで管理する。

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, time::Duration};

use crate::ai::DEFAULT_CORNER_BONUS;

/// Duration型をJSONでシリアライズするためのモジュール
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    /// Durationを(secs, nanos)のタプルとしてシリアライズ
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let secs = duration.as_secs();
        let nanos = duration.subsec_nanos();
        (secs, nanos).serialize(serializer)
    }

    /// (secs, nanos)のタプルからDurationをデシリアライズ
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (secs, nanos) = <(u64, u32)>::deserialize(deserializer)?;
        Ok(Duration::new(secs, nanos))
    }
}

/// エンジンの全設定を管理する構造体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Humanの着手完了からComputerが着手するまでの遅延
    #[serde(with = "duration_serde")]
    pub computer_move_delay: Duration,
    /// 角の位置への加点
    pub corner_bonus: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            computer_move_delay: Duration::from_millis(1000),
            corner_bonus: DEFAULT_CORNER_BONUS,
        }
    }
}

/// 設定関連のエラーを表すenum
/// ファイル読み込み、パース、検証エラーなどを含む
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("設定ファイル解析エラー: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("環境変数エラー: {name} = {value}")]
    EnvVarError { name: String, value: String },

    #[error("設定値が無効です: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

impl EngineConfig {
    /// 指定したファイルパスから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 環境変数から設定を読み込む
    /// デフォルト値をベースに環境変数で上書きする
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = EngineConfig::default();

        if let Ok(delay_ms) = env::var("OTHELLO_COMPUTER_DELAY_MS") {
            let millis: u64 = delay_ms.parse().map_err(|_| ConfigError::EnvVarError {
                name: "OTHELLO_COMPUTER_DELAY_MS".to_string(),
                value: delay_ms,
            })?;
            config.computer_move_delay = Duration::from_millis(millis);
        }

        if let Ok(bonus) = env::var("OTHELLO_CORNER_BONUS") {
            config.corner_bonus = bonus.parse().map_err(|_| ConfigError::EnvVarError {
                name: "OTHELLO_CORNER_BONUS".to_string(),
                value: bonus,
            })?;
        }

        Ok(config)
    }

    /// 設定ファイルと環境変数を結合して設定を読み込む
    /// 設定ファイルがなくてもデフォルト値で動作する
    pub fn load() -> Self {
        let mut config = EngineConfig::default();

        if let Ok(file_config) = Self::from_file("config.json") {
            config = file_config;
        } else if let Ok(file_config) = Self::from_file("config/othello.json") {
            config = file_config;
        }

        // 環境変数で設定を上書き
        if let Ok(env_config) = Self::from_env() {
            if env::var("OTHELLO_COMPUTER_DELAY_MS").is_ok() {
                config.computer_move_delay = env_config.computer_move_delay;
            }
            if env::var("OTHELLO_CORNER_BONUS").is_ok() {
                config.corner_bonus = env_config.corner_bonus;
            }
        }

        config
    }

    /// 現在の設定を指定したファイルに保存する
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 設定値の妥当性をチェックする
    /// 不正な値がある場合はConfigErrorを返す
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer_move_delay.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "computer_move_delay".to_string(),
                value: "0".to_string(),
            });
        }

        if self.corner_bonus < 0 {
            return Err(ConfigError::InvalidValue {
                field: "corner_bonus".to_string(),
                value: self.corner_bonus.to_string(),
            });
        }

        Ok(())
    }
}
