#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rect;
    use crate::Vec2;
    use crate::signal::*;
    use crate::text::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(String::from("a"));
        let echoed = Rc::new(RefCell::new(String::new()));

        let (sig_clone, echoed_clone) = (sig.clone(), echoed.clone());
        sig.subscribe(move |_| *echoed_clone.borrow_mut() = sig_clone.get());

        sig.set("b".into());
        assert_eq!(*echoed.borrow(), "b");
    }

    #[test]
    fn test_unsubscribe() {
        let sig = signal(0);
        let hits = Rc::new(RefCell::new(0));
        let hits_clone = hits.clone();
        let id = sig.subscribe(move |_| *hits_clone.borrow_mut() += 1);

        sig.set(1);
        sig.unsubscribe(id);
        sig.set(2);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_replace_if_changed() {
        let sig = signal(1.0f32);
        let hits = Rc::new(RefCell::new(0));
        let hits_clone = hits.clone();
        sig.subscribe(move |_| *hits_clone.borrow_mut() += 1);

        assert!(!sig.replace_if_changed(1.0));
        assert!(sig.replace_if_changed(2.0));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#12"), Color::BLACK);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(rect.contains(Vec2 { x: 110.0, y: 60.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_monospace_groups_graphemes() {
        // "e" + combining acute is one cluster
        let m = Monospace::new(10.0, 12.0).measure("ae\u{301}b");
        assert_eq!(m.len(), 3);
        assert_eq!(m.positions, vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(m.byte_offsets, vec![0, 1, 4, 5]);
        assert_eq!(m.x_at(99), 30.0);
    }

    #[test]
    fn test_monospace_empty() {
        let m = Monospace::default().measure("");
        assert!(m.is_empty());
        assert_eq!(m.width(), 0.0);
        assert_eq!(m.byte_at(0), 0);
    }
}
