// "notify.error.title" совпадает с английским и берётся из EN
pub(super) const ALL: &[(&str, &str)] = &[
    ("actions.add", "Agregar"),
    ("actions.remove", "Quitar"),
    ("actions.filter", "Filtrar"),
    ("actions.apply", "Aplicar"),
    ("actions.reset", "Limpiar"),
    ("actions.close", "Cerrar"),
    ("actions.refresh", "Actualizar"),
    ("nav.addonstitles", "Títulos adicionales"),
    ("nav.createproduct", "Crear producto"),
    ("app.title", "Consola de administración"),
    ("app.language", "Idioma"),
    ("views.addonstitlelist.title", "Títulos adicionales"),
    ("views.addonstitlelist.empty", "Ningún título coincide con el filtro"),
    ("views.addonstitlelist.columns.id", "ID"),
    ("views.addonstitlelist.columns.name", "Nombre"),
    ("views.addonstitlelist.columns.state", "Estado"),
    ("views.addonstitlelist.columns.created", "Creado"),
    ("views.addonstitlelist.columns.actions", "Acciones"),
    ("views.addonstitlelist.translations", "Traducciones"),
    ("views.addonstitlelist.filter.form.referencename.placeholder", "Nombre de referencia"),
    ("views.addonstitlelist.filter.form.referencename.hint", "Título por defecto o cualquier traducción"),
    ("views.addonstitlelist.filter.form.state.placeholder", "Estado"),
    ("views.addonstitlelist.filter.form.state.active", "Activo"),
    ("views.addonstitlelist.filter.form.state.inactive", "Inactivo"),
    ("views.addonstitlelist.filter.form.state.hint", "Títulos activos o inactivos"),
    ("views.addonstitlelist.filter.form.fromdate.placeholder", "Desde"),
    ("views.addonstitlelist.filter.form.fromdate.hint", "Creado en o después de"),
    ("views.addonstitlelist.filter.form.todate.placeholder", "Hasta"),
    ("views.addonstitlelist.filter.form.todate.hint", "Creado en o antes de"),
    ("views.addonstitlelist.update.title", "Actualizar título"),
    ("views.addonstitlelist.updatestate.title", "Actualizar estado"),
    ("createproduct.main.title", "Colección principal"),
    ("createproduct.main.placeholder", "Seleccione un título principal"),
    ("createproduct.main.hint", "Títulos vendidos como el producto"),
    ("createproduct.addon.title", "Marcar como accesorio"),
    ("createproduct.addon.placeholder", "Seleccione un accesorio"),
    ("createproduct.addon.hint", "Títulos ofrecidos como accesorios"),
    ("createproduct.addon.error.required", "Agregue al menos un accesorio"),
    ("createproduct.multiple.title", "Selección múltiple"),
    ("createproduct.multiple.placeholder", "Seleccione un adicional"),
    ("createproduct.multiple.hint", "El cliente puede elegir cualquiera"),
    ("createproduct.single.title", "Selección única"),
    ("createproduct.single.placeholder", "Seleccione un adicional"),
    ("createproduct.single.hint", "El cliente elige exactamente uno"),
    ("createproduct.empty", "Nada seleccionado"),
];
