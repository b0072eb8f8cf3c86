use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::error::{ChartError, ChartResult};

/// Studies the tooltip knows how to read from a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyKind {
    Ma,
    Vol,
    Macd,
    Boll,
    Bias,
    Brar,
    Cci,
    Cr,
    Dma,
    Dmi,
    Kdj,
    Kd,
    Rsi,
    Psy,
    Trix,
    Obv,
    Vr,
    Wr,
    Mtm,
    Emv,
    Sar,
}

/// Field keys, display labels and value precision for one study.
///
/// `fields[i]` is shown with `labels[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyDescriptor {
    pub kind: StudyKind,
    pub fields: &'static [&'static str],
    pub labels: &'static [&'static str],
    pub precision: u8,
}

impl StudyDescriptor {
    pub fn validate(self) -> ChartResult<()> {
        if self.fields.is_empty() {
            return Err(ChartError::InvalidConfig(format!(
                "study {:?} must declare at least one field",
                self.kind
            )));
        }
        if self.fields.len() != self.labels.len() {
            return Err(ChartError::InvalidConfig(format!(
                "study {:?} declares {} fields but {} labels",
                self.kind,
                self.fields.len(),
                self.labels.len()
            )));
        }
        Ok(())
    }

    /// Reads this study's values from `record` in label order.
    pub fn values<'a>(self, record: &'a Record) -> impl Iterator<Item = Option<f64>> + 'a {
        self.fields.iter().map(move |key| record.field(key))
    }
}

const fn descriptor(
    kind: StudyKind,
    fields: &'static [&'static str],
    labels: &'static [&'static str],
    precision: u8,
) -> StudyDescriptor {
    StudyDescriptor {
        kind,
        fields,
        labels,
        precision,
    }
}

const BUILTIN_STUDIES: [StudyDescriptor; 21] = [
    descriptor(
        StudyKind::Ma,
        &["ma.ma5", "ma.ma10", "ma.ma20", "ma.ma60"],
        &["MA5", "MA10", "MA20", "MA60"],
        2,
    ),
    descriptor(
        StudyKind::Vol,
        &["vol.ma5", "vol.ma10", "vol.ma20", "vol.num"],
        &["MA5", "MA10", "MA20", "VOLUME"],
        0,
    ),
    descriptor(
        StudyKind::Macd,
        &["macd.diff", "macd.dea", "macd.macd"],
        &["DIFF", "DEA", "MACD"],
        2,
    ),
    descriptor(
        StudyKind::Boll,
        &["boll.up", "boll.mid", "boll.dn"],
        &["UP", "MID", "DN"],
        2,
    ),
    descriptor(
        StudyKind::Bias,
        &["bias.bias1", "bias.bias2", "bias.bias3"],
        &["BIAS6", "BIAS12", "BIAS24"],
        2,
    ),
    descriptor(StudyKind::Brar, &["brar.br", "brar.ar"], &["BR", "AR"], 2),
    descriptor(StudyKind::Cci, &["cci.cci"], &["CCI"], 2),
    descriptor(
        StudyKind::Cr,
        &["cr.cr", "cr.ma1", "cr.ma2", "cr.ma3", "cr.ma4"],
        &["CR", "MA1", "MA2", "MA3", "MA4"],
        2,
    ),
    descriptor(StudyKind::Dma, &["dma.dif", "dma.dif_ma"], &["DIF", "DIFMA"], 2),
    descriptor(
        StudyKind::Dmi,
        &["dmi.mdi", "dmi.pdi", "dmi.adx", "dmi.adxr"],
        &["MDI", "PDI", "ADX", "ADXR"],
        2,
    ),
    descriptor(
        StudyKind::Kdj,
        &["kdj.k", "kdj.d", "kdj.j"],
        &["K", "D", "J"],
        2,
    ),
    descriptor(StudyKind::Kd, &["kdj.k", "kdj.d"], &["K", "D"], 2),
    descriptor(
        StudyKind::Rsi,
        &["rsi.rsi1", "rsi.rsi2", "rsi.rsi3"],
        &["RSI6", "RSI12", "RSI24"],
        2,
    ),
    descriptor(StudyKind::Psy, &["psy.psy"], &["PSY"], 2),
    descriptor(
        StudyKind::Trix,
        &["trix.trix", "trix.ma_trix"],
        &["TRIX", "MATRIX"],
        2,
    ),
    descriptor(StudyKind::Obv, &["obv.obv", "obv.ma_obv"], &["OBV", "MAOBV"], 2),
    descriptor(StudyKind::Vr, &["vr.vr", "vr.ma_vr"], &["VR", "MAVR"], 2),
    descriptor(
        StudyKind::Wr,
        &["wr.wr1", "wr.wr2", "wr.wr3"],
        &["WR1", "WR2", "WR3"],
        2,
    ),
    descriptor(StudyKind::Mtm, &["mtm.mtm", "mtm.mtm_ma"], &["MTM", "MTMMA"], 2),
    descriptor(StudyKind::Emv, &["emv.emv", "emv.ma_emv"], &["EMV", "MAEMV"], 2),
    descriptor(StudyKind::Sar, &["sar.sar"], &["SAR"], 2),
];

/// Lookup table from study kind to its descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyRegistry {
    descriptors: IndexMap<StudyKind, StudyDescriptor>,
}

impl Default for StudyRegistry {
    fn default() -> Self {
        Self {
            descriptors: BUILTIN_STUDIES
                .iter()
                .map(|descriptor| (descriptor.kind, *descriptor))
                .collect(),
        }
    }
}

impl StudyRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Adds or replaces the descriptor for `descriptor.kind`.
    pub fn register(&mut self, descriptor: StudyDescriptor) -> ChartResult<()> {
        descriptor.validate()?;
        self.descriptors.insert(descriptor.kind, descriptor);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, kind: StudyKind) -> Option<StudyDescriptor> {
        self.descriptors.get(&kind).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
