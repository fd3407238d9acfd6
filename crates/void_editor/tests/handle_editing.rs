//! Handle edits, gating and undo through the editor

use glam::{Quat, Vec3};
use void_core::ObjectId;
use void_editor::{AreaEditor, AreaScene, CommandError, HandleEdit, HandleKind};
use void_triggers::Area;

fn editor() -> (AreaEditor, ObjectId) {
    let mut scene = AreaScene::new();
    let owner = scene.spawn("cave");
    {
        let owner = scene.get_mut(owner).unwrap();
        owner.monitor.add_area(Area::new("mouth").with_size(Vec3::splat(2.0)));
        owner.monitor.add_area(Area::new("tunnel"));
        owner.gizmos.show_rotate = true;
        owner.gizmos.show_scale = true;
    }
    let mut editor = AreaEditor::new(scene);
    editor.select(owner);
    (editor, owner)
}

fn area(editor: &AreaEditor, owner: ObjectId, index: usize) -> Area {
    editor.scene().get(owner).unwrap().area(index).unwrap().clone()
}

#[test]
fn hidden_handle_is_rejected() {
    let (mut editor, owner) = editor();
    editor.scene_mut().get_mut(owner).unwrap().gizmos.show_scale = false;

    let result = editor.handle_edit(owner, 0, HandleEdit::Scale(Vec3::splat(5.0)));

    assert_eq!(
        result,
        Err(CommandError::HandleHidden {
            owner,
            handle: HandleKind::Scale
        })
    );
    assert_eq!(area(&editor, owner, 0).size, Vec3::splat(2.0));
    assert!(!editor.history().can_undo());
}

#[test]
fn unknown_owner_is_rejected() {
    let (mut editor, _) = editor();
    let missing = ObjectId::from_raw(500);
    assert_eq!(
        editor.handle_edit(missing, 0, HandleEdit::Translate(Vec3::X)),
        Err(CommandError::OwnerNotFound(missing))
    );
}

#[test]
fn drag_merges_into_one_undo_step() {
    let (mut editor, owner) = editor();

    for x in 1..=5 {
        editor
            .handle_edit(owner, 0, HandleEdit::Translate(Vec3::new(x as f32, 0.0, 0.0)))
            .unwrap();
    }
    assert_eq!(area(&editor, owner, 0).center, Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(editor.history().undo_count(), 1);

    assert!(editor.undo());
    assert_eq!(area(&editor, owner, 0).center, Vec3::ZERO);

    assert!(editor.redo());
    assert_eq!(area(&editor, owner, 0).center, Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn different_handles_and_areas_do_not_merge() {
    let (mut editor, owner) = editor();

    editor.handle_edit(owner, 0, HandleEdit::Translate(Vec3::X)).unwrap();
    editor.handle_edit(owner, 1, HandleEdit::Translate(Vec3::Y)).unwrap();
    editor.handle_edit(owner, 1, HandleEdit::Scale(Vec3::splat(3.0))).unwrap();
    editor
        .handle_edit(owner, 1, HandleEdit::Rotate(Quat::from_rotation_y(0.5)))
        .unwrap();

    assert_eq!(editor.history().undo_count(), 4);
    assert_eq!(editor.history().undo_description(), Some("Rotate Area"));
}

#[test]
fn end_drag_starts_new_step() {
    let (mut editor, owner) = editor();

    editor.handle_edit(owner, 0, HandleEdit::Scale(Vec3::splat(3.0))).unwrap();
    editor.handle_edit(owner, 0, HandleEdit::Scale(Vec3::splat(4.0))).unwrap();
    editor.end_drag();
    editor.handle_edit(owner, 0, HandleEdit::Scale(Vec3::splat(6.0))).unwrap();

    assert_eq!(editor.history().undo_count(), 2);

    editor.undo();
    assert_eq!(area(&editor, owner, 0).size, Vec3::splat(4.0));
    editor.undo();
    assert_eq!(area(&editor, owner, 0).size, Vec3::splat(2.0));
}

#[test]
fn undo_restores_rotation_exactly() {
    let (mut editor, owner) = editor();
    let original = Quat::from_rotation_x(0.25);
    editor.scene_mut().get_mut(owner).unwrap().area_mut(0).unwrap().rotation = original;

    editor
        .handle_edit(owner, 0, HandleEdit::Rotate(Quat::from_rotation_z(1.0)))
        .unwrap();
    editor.undo();

    assert_eq!(area(&editor, owner, 0).rotation, original);
}

#[test]
fn new_edit_clears_redo() {
    let (mut editor, owner) = editor();

    editor.handle_edit(owner, 0, HandleEdit::Translate(Vec3::X)).unwrap();
    editor.undo();
    assert!(editor.history().can_redo());

    editor.handle_edit(owner, 0, HandleEdit::Translate(Vec3::Z)).unwrap();
    assert!(!editor.history().can_redo());
    assert!(!editor.redo());
}

#[test]
fn add_and_remove_areas_are_undoable() {
    let (mut editor, owner) = editor();

    let index = editor.add_area(owner, Area::new("chamber")).unwrap();
    assert_eq!(index, 2);

    editor.remove_area(owner, 0).unwrap();
    assert_eq!(area(&editor, owner, 0).name, "tunnel");

    editor.undo();
    assert_eq!(area(&editor, owner, 0).name, "mouth");

    editor.undo();
    assert_eq!(editor.scene().get(owner).unwrap().monitor.area_count(), 2);

    assert_eq!(
        editor.remove_area(owner, 9),
        Err(CommandError::AreaNotFound { owner, index: 9 })
    );
}

#[test]
fn draw_list_follows_edits() {
    let (mut editor, owner) = editor();
    editor
        .handle_edit(owner, 0, HandleEdit::Translate(Vec3::new(0.0, 3.0, 0.0)))
        .unwrap();

    let boxes = editor.draw_list();
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0].label, "mouth");
    assert_eq!(boxes[0].volume.center, Vec3::new(0.0, 3.0, 0.0));

    // Three handles per area with every toggle on
    assert_eq!(editor.handles().len(), 6);
}
