//! Prebuilt collections shaped like a compressible-flow solver's output.

use outfield_core::{FieldType, ScreenFormat};
use outfield_registry::{
    CustomFieldDef, HistoryField, HistoryFieldCollection, VolumeField, VolumeFieldCollection,
};

/// Directly-written fields of [`aero_history`]: `(name, group, type)`.
pub const AERO_DIRECT: [(&str, &str, FieldType); 6] = [
    ("INNER_ITER", "ITER", FieldType::Default),
    ("RMS_DENSITY", "RMS_RES", FieldType::Residual),
    ("RMS_ENERGY", "RMS_RES", FieldType::AutoResidual),
    ("LIFT", "AERO_COEFF", FieldType::Coefficient),
    ("DRAG", "AERO_COEFF", FieldType::Coefficient),
    ("MOMENT_Z", "AERO_COEFF", FieldType::AutoCoefficient),
];

/// History collection with [`AERO_DIRECT`] followed by two custom fields:
/// `EFFICIENCY = LIFT / DRAG` and `DRAG_COUNTS = 1e4 * DRAG`.
pub fn aero_history() -> HistoryFieldCollection {
    let mut history = HistoryFieldCollection::with_capacity(AERO_DIRECT.len() + 2);
    for (name, group, ty) in AERO_DIRECT {
        let format = match ty {
            FieldType::Default => ScreenFormat::Integer,
            FieldType::Residual | FieldType::AutoResidual => ScreenFormat::Fixed,
            _ => ScreenFormat::Scientific,
        };
        history
            .insert(HistoryField::new(name, format, group, ty, "").unwrap())
            .unwrap();
    }
    history
        .register_custom(&CustomFieldDef::new("EFFICIENCY", "LIFT / DRAG"))
        .unwrap();
    history
        .register_custom(&CustomFieldDef::new("DRAG_COUNTS", "1e4 * DRAG"))
        .unwrap();
    history
}

/// History collection with `direct` fields `D0..` (value `i + 1`) and
/// `custom` fields `C0..`, each summing two direct fields.
pub fn synthetic_history(direct: usize, custom: usize) -> HistoryFieldCollection {
    let mut history = HistoryFieldCollection::with_capacity(direct + custom);
    for i in 0..direct {
        let field = HistoryField::new(
            format!("D{i}"),
            ScreenFormat::Fixed,
            format!("G{}", i % 8),
            FieldType::Default,
            "",
        )
        .unwrap();
        history.insert(field).unwrap();
        history.set_value_by_index(i, (i + 1) as f64).unwrap();
    }
    for j in 0..custom {
        let a = j % direct.max(1);
        let b = (j + 1) % direct.max(1);
        let def = CustomFieldDef::new(format!("C{j}"), format!("D{a} + D{b}"));
        history.register_custom(&def).unwrap();
    }
    history
}

/// Volume collection with conservative variables in group `SOLUTION` and
/// primitives in group `PRIMITIVE`, offsets assigned in order.
pub fn solution_volume() -> VolumeFieldCollection {
    let names = [
        ("Density", "SOLUTION"),
        ("Momentum_x", "SOLUTION"),
        ("Momentum_y", "SOLUTION"),
        ("Energy", "SOLUTION"),
        ("Pressure", "PRIMITIVE"),
        ("Temperature", "PRIMITIVE"),
        ("Mach", "PRIMITIVE"),
    ];
    let mut volume = VolumeFieldCollection::with_capacity(names.len());
    for (offset, (name, group)) in names.into_iter().enumerate() {
        volume
            .insert(VolumeField::new(name, offset, group, ""))
            .unwrap();
    }
    volume
}
