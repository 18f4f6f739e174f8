pub(super) const BASE: &[(&str, &str)] = &[
    ("actions.add", "Add"),
    ("actions.remove", "Remove"),
    ("actions.filter", "Filter"),
    ("actions.apply", "Apply"),
    ("actions.reset", "Reset"),
    ("actions.close", "Close"),
    ("actions.refresh", "Refresh"),
    ("notify.error.title", "Error"),
    ("nav.addonstitles", "Addon titles"),
    ("nav.createproduct", "Create product"),
    ("app.title", "Admin console"),
    ("app.language", "Language"),
    ("createproduct.main.title", "Main titles"),
];

pub(super) const VIEWS: &[(&str, &str)] = &[
    // addons title list
    ("views.addonstitlelist.title", "Addon titles"),
    ("views.addonstitlelist.empty", "No titles match the filter"),
    ("views.addonstitlelist.columns.id", "ID"),
    ("views.addonstitlelist.columns.name", "Name"),
    ("views.addonstitlelist.columns.state", "State"),
    ("views.addonstitlelist.columns.created", "Created"),
    ("views.addonstitlelist.columns.actions", "Actions"),
    ("views.addonstitlelist.translations", "Translations"),
    ("views.addonstitlelist.filter.form.referencename.placeholder", "Reference name"),
    ("views.addonstitlelist.filter.form.referencename.hint", "Default title or any translation"),
    ("views.addonstitlelist.filter.form.state.placeholder", "State"),
    ("views.addonstitlelist.filter.form.state.active", "Active"),
    ("views.addonstitlelist.filter.form.state.inactive", "Inactive"),
    ("views.addonstitlelist.filter.form.state.hint", "Active or inactive titles"),
    ("views.addonstitlelist.filter.form.fromdate.placeholder", "From date"),
    ("views.addonstitlelist.filter.form.fromdate.hint", "Created on or after"),
    ("views.addonstitlelist.filter.form.todate.placeholder", "To date"),
    ("views.addonstitlelist.filter.form.todate.hint", "Created on or before"),
    ("views.addonstitlelist.update.title", "Update title"),
    ("views.addonstitlelist.updatestate.title", "Update state"),
    // create product
    ("createproduct.main.title", "Main collection"),
    ("createproduct.main.placeholder", "Select a main title"),
    ("createproduct.main.hint", "Titles sold as the product itself"),
    ("createproduct.addon.title", "Mark as accessory"),
    ("createproduct.addon.placeholder", "Select an accessory"),
    ("createproduct.addon.hint", "Titles offered as accessories"),
    ("createproduct.addon.error.required", "Add at least one accessory"),
    ("createproduct.multiple.title", "Multiple choice"),
    ("createproduct.multiple.placeholder", "Select an addon"),
    ("createproduct.multiple.hint", "The customer may pick any of these"),
    ("createproduct.single.title", "Single choice"),
    ("createproduct.single.placeholder", "Select an addon"),
    ("createproduct.single.hint", "The customer picks exactly one of these"),
    ("createproduct.empty", "Nothing selected yet"),
];
