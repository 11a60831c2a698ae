//! 스캔 서비스 -- 조회와 리포트 조립 연결
//!
//! [`ScanService`]는 바코드로 제품을 조회하고, 찾은 경우에만 [`ReportAssembler`]를 호출합니다.
//! 조회 결과와 소요 시간, 탐지된 위험 등급은 `metrics` 파사드로 기록됩니다.

use std::time::Instant;

use tracing::{info, warn};

use bioscan_core::metrics as m;
use bioscan_core::types::Barcode;
use bioscan_report::{ReportAssembler, ScanReport};

use crate::error::ProductLookupError;
use crate::source::{LookupOutcome, ProductLookup};

/// 스캔 결과
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// 조립된 리포트
    Report(Box<ScanReport>),
    /// 제품 데이터베이스에 레코드가 없음
    NotFound {
        /// 조회한 바코드
        barcode: Barcode,
    },
}

impl ScanOutcome {
    /// 리포트가 있으면 반환합니다.
    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            Self::Report(report) => Some(report.as_ref()),
            Self::NotFound { .. } => None,
        }
    }
}

/// 조회 + 조립 서비스
#[derive(Debug, Clone)]
pub struct ScanService<L> {
    lookup: L,
    assembler: ReportAssembler,
}

impl<L: ProductLookup> ScanService<L> {
    pub fn new(lookup: L, assembler: ReportAssembler) -> Self {
        Self { lookup, assembler }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// 바코드 하나를 스캔합니다.
    ///
    /// 찾지 못한 제품은 `Ok(ScanOutcome::NotFound)`이며 조립기를 호출하지 않습니다.
    pub async fn scan(&self, barcode: &Barcode) -> Result<ScanOutcome, ProductLookupError> {
        let started = Instant::now();
        let result = self.lookup.fetch(barcode).await;
        metrics::histogram!(m::LOOKUP_DURATION_SECONDS).record(started.elapsed().as_secs_f64());

        match result {
            Ok(LookupOutcome::Found(raw)) => {
                metrics::counter!(m::LOOKUPS_TOTAL, m::LABEL_RESULT => m::RESULT_FOUND)
                    .increment(1);

                let report = self.assembler.assemble(&raw);
                metrics::counter!(m::REPORTS_ASSEMBLED_TOTAL).increment(1);
                for risk in &report.detected_risks {
                    metrics::counter!(m::RISKS_DETECTED_TOTAL, m::LABEL_TIER => risk.tier().as_label())
                        .increment(1);
                }

                info!(
                    barcode = %barcode,
                    product = %report.product_name,
                    risks = report.detected_risks.len(),
                    "product scanned"
                );
                Ok(ScanOutcome::Report(Box::new(report)))
            }
            Ok(LookupOutcome::NotFound) => {
                metrics::counter!(m::LOOKUPS_TOTAL, m::LABEL_RESULT => m::RESULT_NOT_FOUND)
                    .increment(1);
                info!(barcode = %barcode, "product not found");
                Ok(ScanOutcome::NotFound {
                    barcode: barcode.clone(),
                })
            }
            Err(e) => {
                metrics::counter!(m::LOOKUPS_TOTAL, m::LABEL_RESULT => m::RESULT_ERROR)
                    .increment(1);
                warn!(barcode = %barcode, error = %e, "product lookup failed");
                Err(e)
            }
        }
    }
}
