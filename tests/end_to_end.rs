#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use floor_finish::error::PipelineError;
use floor_finish::math::{Point2, Point3};
use floor_finish::model::{ElementId, RecordingSink, Room, Wall};
use floor_finish::operations::finishing::AlignWalls;
use floor_finish::{
    AddFinishingCommand, BuildingModel, CommandResult, FinishError, FinishFloor, FinishParams,
    MemoryModel,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

/// A 10×10 slab on a level at elevation 0 and one wall of height 12 just
/// inside its south edge.
fn square_room() -> (MemoryModel, ElementId) {
    let mut model = MemoryModel::new();
    let level = model.add_level("Level 1", 0.0);
    let generic = model.add_wall_type("Generic - 200mm", 0.65);
    model.add_wall_type("Finishing", 0.05);
    model
        .add_floor(
            "Slab",
            level,
            vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)],
            1.0,
        )
        .unwrap();
    let wall = model.add_wall(generic, level, p(1.0, 0.8), p(9.0, 0.8), 12.0).unwrap();
    (model, wall)
}

#[test]
fn square_floor_is_finished() {
    init_tracing();
    let (mut model, wall) = square_room();

    let outcome = FinishFloor::new(FinishParams::default()).execute(&mut model).unwrap();

    assert_eq!(outcome.footprint.len(), 4);
    assert!(outcome.footprint.segments().iter().all(|s| s.start().z.abs() < 1e-12));

    assert_eq!(outcome.alignment.moved, vec![wall]);
    let centerline = model.get::<Wall>(wall).unwrap().centerline.clone().unwrap();
    assert_relative_eq!(centerline.midpoint(), p(5.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(model.get::<Wall>(wall).unwrap().height, 12.0);

    let room = model.get::<Room>(outcome.room).unwrap();
    assert_relative_eq!(room.location, Point2::new(5.0, 5.0));
    assert_relative_eq!(room.area, 100.0, epsilon = 1e-9);

    assert_eq!(outcome.boundary.len(), 4);
    assert_eq!(outcome.generation.created.len(), 4);
    assert_eq!(outcome.generation.skipped, 0);
    for &id in &outcome.generation.created {
        let finishing = model.get::<Wall>(id).unwrap();
        assert_relative_eq!(finishing.height, 12.0);
        assert_relative_eq!(finishing.base_offset, 0.0);
    }

    // 4 × 10 × 12 + 100 = 580 ft²
    assert_relative_eq!(outcome.total_area, 53.88);
    assert!(!model.is_modifiable());
}

#[test]
fn command_reports_area() {
    init_tracing();
    let (mut model, _) = square_room();
    let mut sink = RecordingSink::default();

    let result = AddFinishingCommand::new(FinishParams::default()).execute(&mut model, &mut sink);

    assert_eq!(result, CommandResult::Succeeded { total_area: 53.88 });
    assert_eq!(sink.messages.len(), 1);
    assert_eq!(sink.messages[0].1, "Total finishing area: 53.88 m²");
}

#[test]
fn empty_model_fails_before_any_scope() {
    init_tracing();
    let mut model = MemoryModel::new();
    let level = model.add_level("Level 1", 0.0);
    model
        .add_floor("Slab", level, vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)], 0.5)
        .unwrap();
    let elements = model.element_count();

    let err = FinishFloor::new(FinishParams::default()).execute(&mut model).unwrap_err();

    assert!(matches!(err, FinishError::Pipeline(PipelineError::NoWalls)));
    assert!(model.scope_history().is_empty());
    assert_eq!(model.element_count(), elements);
}

#[test]
fn failed_command_shows_error_verbatim() {
    init_tracing();
    let (mut model, _) = square_room();
    let mut sink = RecordingSink::default();
    let params = FinishParams::default().with_wall_type_name("finishing");

    let result = AddFinishingCommand::new(params).execute(&mut model, &mut sink);

    let message = PipelineError::NoFinishingWalls.to_string();
    assert_eq!(result, CommandResult::Failed { message: message.clone() });
    assert_eq!(sink.messages, vec![("Error".to_owned(), message)]);
    // The wall move and the room stay committed.
    assert_eq!(model.collect::<Room>().len(), 1);
}

#[test]
fn alignment_is_idempotent() {
    init_tracing();
    let (mut model, wall) = square_room();
    let outcome = FinishFloor::new(FinishParams::default()).execute(&mut model).unwrap();
    let before = model.get::<Wall>(wall).unwrap().centerline.clone();

    let again = AlignWalls::new(vec![wall], outcome.footprint.into_segments())
        .execute(&mut model)
        .unwrap();

    assert!(again.moved.is_empty());
    assert_eq!(again.unchanged, 1);
    assert_eq!(model.get::<Wall>(wall).unwrap().centerline, before);
}

#[test]
fn metric_models_convert_directly() {
    init_tracing();
    let mut model = MemoryModel::new();
    let level = model.add_level("Level 1", 0.0);
    let generic = model.add_wall_type("Generic", 0.2);
    model.add_wall_type("Finishing", 0.02);
    model
        .add_floor("Slab", level, vec![p(0.0, 0.0), p(5.0, 0.0), p(5.0, 4.0), p(0.0, 4.0)], 0.3)
        .unwrap();
    model.add_wall(generic, level, p(0.0, 4.0), p(5.0, 4.0), 3.0).unwrap();

    let params = FinishParams::from_json(r#"{"unit":"meter","area_precision":1}"#).unwrap();
    let outcome = FinishFloor::new(params).execute(&mut model).unwrap();

    // 18 × 3 + 20 = 74 m²
    assert_relative_eq!(outcome.total_area, 74.0);
}
