use cosmwasm_schema::cw_serde;
use cosmwasm_std::Timestamp;

use crate::error::ContractError;

/// Where the drop currently is in time
#[cw_serde]
pub enum SalePhase {
    /// No presale was scheduled. The public sale is open.
    Unconfigured,
    /// A presale is scheduled but has not started, or its duration is not set yet
    PresalePending,
    PresaleActive,
    SaleOpen,
}

/// The presale window `[start, start + duration)` followed by the open-ended public sale.
#[cw_serde]
#[derive(Default)]
pub struct SaleWindow {
    pub start: Option<Timestamp>,
    /// Presale duration in seconds
    pub duration: Option<u64>,
}

impl SaleWindow {
    pub fn set_start(&mut self, start: Timestamp, now: Timestamp) -> Result<(), ContractError> {
        if start <= now {
            return Err(ContractError::PastStartDate);
        }
        self.start = Some(start);
        Ok(())
    }

    pub fn set_duration(&mut self, seconds: u64) -> Result<(), ContractError> {
        if seconds == 0 {
            return Err(ContractError::InvalidDuration);
        }
        self.duration = Some(seconds);
        Ok(())
    }

    /// The end of the presale, which is the start of the public sale
    pub fn end(&self) -> Option<Timestamp> {
        match (self.start, self.duration) {
            (Some(start), Some(duration)) => Some(start.plus_seconds(duration)),
            _ => None,
        }
    }

    pub fn phase(&self, now: Timestamp) -> SalePhase {
        let Some(start) = self.start else {
            return SalePhase::Unconfigured;
        };
        match self.end() {
            Some(end) if now >= end => SalePhase::SaleOpen,
            Some(_) if now >= start => SalePhase::PresaleActive,
            _ => SalePhase::PresalePending,
        }
    }

    pub fn is_presale_active(&self, now: Timestamp) -> bool {
        self.phase(now) == SalePhase::PresaleActive
    }

    pub fn is_sale_active(&self, now: Timestamp) -> bool {
        matches!(
            self.phase(now),
            SalePhase::Unconfigured | SalePhase::SaleOpen
        )
    }

    pub fn ensure_presale_active(&self, now: Timestamp) -> Result<(), ContractError> {
        if self.is_presale_active(now) {
            Ok(())
        } else {
            Err(ContractError::PresaleWindowClosed)
        }
    }

    pub fn ensure_sale_active(&self, now: Timestamp) -> Result<(), ContractError> {
        if self.is_sale_active(now) {
            Ok(())
        } else {
            Err(ContractError::SaleNotStarted)
        }
    }
}
