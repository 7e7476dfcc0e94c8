pub fn card(n: &mut mxoxide::Node<'_>) {
    n.div(Some(&mxoxide::Attr::map([("class", "card"), ("id", "c1")])), |n| {
        n.img(Some(&mxoxide::Attr::map([("alt", "A & B"), ("src", "/a.png")])));
        n.h2(None, |n| {
            n.text("Title");
        });
        n.p(None, |n| {
            n.text("Hello");
            n.b(None, |n| {
                n.text("world");
            });
        });
        n.template(None, |n| {
            n.p(None, |n| {
                n.text("row");
            });
        });
        n.svg(None, |n| {
            n.element_with("use", Some(&mxoxide::Attr::map([("xlink:href", "#icon")])), |_| {});
        });
        n.button(Some(&mxoxide::Attr::map([("disabled", ""), ("type", "button")])), |n| {
            n.text("Go");
        });
    });
}
