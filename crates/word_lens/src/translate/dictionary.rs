//! English to Spanish word pairs

/// Source word and its substitute, one entry per source word
///
/// Lookups are made with lowercased words, so the few capitalized keys
/// (`"I"`, `"TV"`, ...) are never hit.
pub const ENGLISH_TO_SPANISH: &[(&str, &str)] = &[
    ("a", "un"),
    ("able", "poder"),
    ("about", "acerca de"),
    ("above", "encima"),
    ("accept", "aceptar"),
    ("across", "a través de"),
    ("act", "acto"),
    ("actually", "realmente"),
    ("add", "ańadir"),
    ("admit", "admitir"),
    ("afraid", "asustado"),
    ("after", "después"),
    ("afternoon", "tarde"),
    ("again", "de nuevo"),
    ("against", "en contra"),
    ("age", "ańos"),
    ("ago", "hace"),
    ("agree", "de acuerdo"),
    ("ah", "ah"),
    ("ahead", "adelante"),
    ("air", "aire"),
    ("all", "todas"),
    ("allow", "permitir"),
    ("almost", "casi"),
    ("alone", "solo"),
    ("along", "a lo largo"),
    ("already", "ya"),
    ("alright", "bien"),
    ("also", "además"),
    ("although", "a pesar de que"),
    ("always", "siempre"),
    ("am", "a.m"),
    ("amaze", "asombro"),
    ("an", "un"),
    ("and", "y"),
    ("anger", "enfado"),
    ("angry", "enojado"),
    ("animal", "animal"),
    ("annoy", "molestar"),
    ("another", "otro"),
    ("answer", "responder"),
    ("any", "alguna"),
    ("anymore", "nunca más"),
    ("anyone", "nadie"),
    ("anything", "cualquier cosa"),
    ("anyway", "de todas formas"),
    ("apartment", "apartamento"),
    ("apparently", "aparentemente"),
    ("appear", "aparecer"),
    ("approach", "enfoque"),
    ("are", "son"),
    ("area", "zona"),
    ("aren't", "no son"),
    ("arm", "brazo"),
    ("around", "alrededor"),
    ("arrive", "llegar"),
    ("as", "como"),
    ("ask", "pedir"),
    ("asleep", "dormido"),
    ("ass", "culo"),
    ("at", "a"),
    ("attack", "ataque"),
    ("attempt", "intento"),
    ("attention", "atención"),
    ("aunt", "tía"),
    ("avoid", "evitar"),
    ("away", "lejos"),
    ("baby", "bebé"),
    ("back", "espalda"),
    ("bad", "malo"),
    ("bag", "bolso"),
    ("ball", "pelota"),
    ("band", "banda"),
    ("bar", "bar"),
    ("barely", "apenas"),
    ("bathroom", "bańo"),
    ("be", "ser"),
    ("beat", "golpear"),
    ("beautiful", "hermosa"),
    ("became", "convirtió"),
    ("because", "porque"),
    ("become", "volverse"),
    ("bed", "cama"),
    ("bedroom", "Cuarto"),
    ("been", "estado"),
    ("before", "antes de"),
    ("began", "empezó"),
    ("begin", "empezar"),
    ("behind", "detrás"),
    ("believe", "creer"),
    ("bell", "campana"),
    ("beside", "junto a"),
    ("besides", "además"),
    ("best", "mejor"),
    ("better", "mejor"),
    ("between", "Entre"),
    ("big", "grande"),
    ("bit", "poco"),
    ("bite", "mordedura"),
    ("black", "negro"),
    ("blink", "parpadeo"),
    ("block", "bloquear"),
    ("blonde", "rubia"),
    ("blood", "sangre"),
    ("blue", "azul"),
    ("blush", "sonrojo"),
    ("body", "cuerpo"),
    ("book", "libro"),
    ("bore", "aburrir"),
    ("both", "ambos"),
    ("bother", "molestia"),
    ("bottle", "botella"),
    ("bottom", "fondo"),
    ("box", "caja"),
    ("boy", "chico"),
    ("boyfriend", "novio"),
    ("brain", "cerebro"),
    ("break", "romper"),
    ("breakfast", "desayuno"),
    ("breath", "aliento"),
    ("breathe", "respirar"),
    ("bright", "brillante"),
    ("bring", "traer"),
    ("broke", "rompió"),
    ("broken", "roto"),
    ("brother", "hermano"),
    ("brought", "trajo"),
    ("brown", "marrón"),
    ("brush", "cepillo"),
    ("build", "construir"),
    ("burn", "quemar"),
    ("burst", "ráfaga"),
    ("bus", "autobús"),
    ("business", "negocio"),
    ("busy", "ocupado"),
    ("but", "pero"),
    ("buy", "comprar"),
    ("by", "por"),
    ("call", "llamada"),
    ("calm", "calma"),
    ("came", "vino"),
    ("can", "poder"),
    ("can't", "hipocresía"),
    ("car", "coche"),
    ("card", "tarjeta"),
    ("care", "cuidado"),
    ("carefully", "cuidadosamente"),
    ("carry", "llevar"),
    ("case", "caso"),
    ("cat", "gato"),
    ("catch", "captura"),
    ("caught", "atrapado"),
    ("cause", "porque"),
    ("cell", "celda"),
    ("chair", "silla"),
    ("chance", "oportunidad"),
    ("change", "cambio"),
    ("chase", "persecución"),
    ("check", "comprobar"),
    ("cheek", "mejilla"),
    ("chest", "pecho"),
    ("child", "nińo"),
    ("children", "nińos"),
    ("chuckle", "risita"),
    ("city", "ciudad"),
    ("class", "clase"),
    ("clean", "limpiar"),
    ("clear", "claro"),
    ("climb", "escalada"),
    ("close", "cerca"),
    ("clothes", "ropa"),
    ("coffee", "café"),
    ("cold", "frío"),
    ("college", "Universidad"),
    ("color", "color"),
    ("come", "ven"),
    ("comment", "comentario"),
    ("complete", "completar"),
    ("completely", "completamente"),
    ("computer", "computadora"),
    ("concern", "preocupación"),
    ("confuse", "confundir"),
    ("consider", "considerar"),
    ("continue", "continuar"),
    ("control", "controlar"),
    ("conversation", "conversación"),
    ("cool", "guay"),
    ("corner", "esquina"),
    ("couch", "sofá"),
    ("could", "podría"),
    ("couldn't", "no podía"),
    ("counter", "mostrador"),
    ("couple", "par"),
    ("course", "curso"),
    ("cover", "cubrir"),
    ("crack", "grieta"),
    ("crazy", "loca"),
    ("cross", "cruzar"),
    ("crowd", "multitud"),
    ("cry", "llorar"),
    ("cup", "taza"),
    ("cut", "cortar"),
    ("cute", "linda"),
    ("dad", "papá"),
    ("damn", "Maldita sea"),
    ("dance", "baile"),
    ("dark", "oscuro"),
    ("date", "fecha"),
    ("daughter", "hija"),
    ("day", "día"),
    ("dead", "muerto"),
    ("deal", "acuerdo"),
    ("dear", "querido"),
    ("death", "muerte"),
    ("decide", "decidir"),
    ("deep", "profundo"),
    ("definitely", "seguro"),
    ("desk", "escritorio"),
    ("did", "hizo"),
    ("didn't", "no lo hizo"),
    ("die", "morir"),
    ("different", "diferente"),
    ("dinner", "cena"),
    ("direction", "dirección"),
    ("disappear", "desaparecer"),
    ("do", "hacer"),
    ("doctor", "doctor"),
    ("does", "hace"),
    ("doesn't", "no hace"),
    ("dog", "perro"),
    ("don't", "no hacer"),
    ("done", "hecho"),
    ("door", "puerta"),
    ("doubt", "duda"),
    ("down", "abajo"),
    ("drag", "arrastrar"),
    ("draw", "dibujar"),
    ("dream", "sueńa"),
    ("dress", "vestir"),
    ("drink", "beber"),
    ("drive", "manejar"),
    ("drop", "soltar"),
    ("drove", "condujo"),
    ("dry", "seco"),
    ("during", "durante"),
    ("each", "cada"),
    ("ear", "oreja"),
    ("early", "temprano"),
    ("easily", "fácilmente"),
    ("easy", "fácil"),
    ("eat", "comer"),
    ("edge", "borde"),
    ("either", "ya sea"),
    ("else", "más"),
    ("empty", "vacío"),
    ("end", "final"),
    ("enjoy", "disfrutar"),
    ("enough", "suficiente"),
    ("enter", "entrar"),
    ("entire", "todo"),
    ("escape", "escapar"),
    ("especially", "especialmente"),
    ("even", "incluso"),
    ("evening", "noche"),
    ("eventually", "finalmente"),
    ("ever", "nunca"),
    ("every", "cada"),
    ("everyone", "todo el mundo"),
    ("everything", "todo"),
    ("exactly", "exactamente"),
    ("except", "excepto"),
    ("excite", "excitar"),
    ("exclaim", "exclamar"),
    ("excuse", "excusa"),
    ("expect", "esperar"),
    ("explain", "explique"),
    ("expression", "expresión"),
    ("eye", "ojo"),
    ("eyebrow", "ceja"),
    ("face", "cara"),
    ("fact", "hecho"),
    ("fall", "otońo"),
    ("family", "familia"),
    ("far", "lejos"),
    ("fast", "ayunar"),
    ("father", "padre"),
    ("fault", "culpa"),
    ("favorite", "favorito"),
    ("fear", "miedo"),
    ("feel", "sensación"),
    ("feet", "pies"),
    ("fell", "cayó"),
    ("felt", "sintió"),
    ("few", "pocos"),
    ("field", "campo"),
    ("fight", "lucha"),
    ("figure", "figura"),
    ("fill", "llenar"),
    ("finally", "finalmente"),
    ("find", "encontrar"),
    ("fine", "multa"),
    ("finger", "dedo"),
    ("finish", "acabado"),
    ("fire", "fuego"),
    ("first", "primero"),
    ("fit", "ajuste"),
    ("five", "cinco"),
    ("fix", "fijar"),
    ("flash", "destello"),
    ("flip", "dar la vuelta"),
    ("floor", "piso"),
    ("fly", "mosca"),
    ("focus", "atención"),
    ("follow", "seguir"),
    ("food", "comida"),
    ("foot", "pie"),
    ("for", "para"),
    ("force", "fuerza"),
    ("forget", "olvidar"),
    ("form", "formar"),
    ("forward", "adelante"),
    ("found", "encontró"),
    ("four", "las cuatro"),
    ("free", "gratis"),
    ("friend", "amigo"),
    ("from", "de"),
    ("front", "frente"),
    ("frown", "fruncir el ceńo"),
    ("fuck", "Mierda"),
    ("full", "lleno"),
    ("fun", "divertido"),
    ("funny", "gracioso"),
    ("further", "promover"),
    ("game", "juego"),
    ("gasp", "jadear"),
    ("gave", "dio"),
    ("gaze", "mirada"),
    ("gently", "suavemente"),
    ("get", "obtener"),
    ("giggle", "risilla"),
    ("girl", "muchacha"),
    ("girlfriend", "Novia"),
    ("give", "dar"),
    ("given", "dado"),
    ("glad", "alegre"),
    ("glance", "vistazo"),
    ("glare", "deslumbramiento"),
    ("glass", "vaso"),
    ("go", "ir"),
    ("God", "Dios"),
    ("gone", "ido"),
    ("gonna", "va"),
    ("good", "bueno"),
    ("got", "tiene"),
    ("gotten", "conseguido"),
    ("grab", "agarrar"),
    ("great", "estupendo"),
    ("green", "verde"),
    ("greet", "saludar"),
    ("grey", "gris"),
    ("grin", "mueca"),
    ("grip", "apretón"),
    ("groan", "gemido"),
    ("ground", "suelo"),
    ("group", "grupo"),
    ("grow", "crecer"),
    ("guard", "Guardia"),
    ("guess", "adivinar"),
    ("gun", "pistola"),
    ("guy", "chico"),
    ("had", "tenido"),
    ("hadn't", "no tenía"),
    ("hair", "cabello"),
    ("half", "mitad"),
    ("hall", "sala"),
    ("hallway", "pasillo"),
    ("hand", "mano"),
    ("handle", "encargarse de"),
    ("hang", "colgar"),
    ("happen", "ocurrir"),
    ("happy", "contento"),
    ("hard", "difícil"),
    ("has", "tiene"),
    ("hate", "odio"),
    ("have", "tener"),
    ("haven't", "no tiene"),
    ("he", "él"),
    ("he'd", "él había"),
    ("he's", "él es"),
    ("head", "cabeza"),
    ("hear", "oír"),
    ("heard", "oído"),
    ("heart", "corazón"),
    ("heavy", "pesado"),
    ("held", "retenida"),
    ("hell", "infierno"),
    ("hello", "Hola"),
    ("help", "ayuda"),
    ("her", "su"),
    ("here", "aquí"),
    ("herself", "sí misma"),
    ("hey", "Oye"),
    ("hi", "Hola"),
    ("hide", "esconder"),
    ("high", "alto"),
    ("him", "él"),
    ("himself", "él mismo"),
    ("his", "su"),
    ("hit", "golpear"),
    ("hold", "sostener"),
    ("home", "hogar"),
    ("hope", "esperanza"),
    ("horse", "caballo"),
    ("hospital", "hospital"),
    ("hot", "caliente"),
    ("hour", "hora"),
    ("house", "casa"),
    ("how", "cómo"),
    ("however", "sin embargo"),
    ("hug", "abrazo"),
    ("huge", "enorme"),
    ("huh", "eh"),
    ("human", "humano"),
    ("hundred", "cien"),
    ("hung", "colgado"),
    ("hurry", "prisa"),
    ("hurt", "herir"),
    ("I", "yo"),
    ("I'd", "Carné de identidad"),
    ("I'll", "Enfermo"),
    ("I'm", "estoy"),
    ("I've", "He"),
    ("ice", "hielo"),
    ("idea", "idea"),
    ("if", "si"),
    ("ignore", "ignorar"),
    ("imagine", "imagina"),
    ("immediately", "inmediatamente"),
    ("important", "importante"),
    ("in", "en"),
    ("inside", "dentro"),
    ("instead", "en lugar"),
    ("interest", "interesar"),
    ("interrupt", "interrumpir"),
    ("into", "dentro"),
    ("is", "es"),
    ("isn't", "no es"),
    ("it", "eso"),
    ("it's", "sus"),
    ("its", "sus"),
    ("jacket", "chaqueta"),
    ("jeans", "pantalones"),
    ("jerk", "imbécil"),
    ("job", "trabajo"),
    ("join", "unirse"),
    ("joke", "broma"),
    ("jump", "saltar"),
    ("just", "sólo"),
    ("keep", "guardar"),
    ("kept", "mantenido"),
    ("key", "llave"),
    ("kick", "patada"),
    ("kid", "nińo"),
    ("kill", "matar"),
    ("kind", "tipo"),
    ("kiss", "Beso"),
    ("kitchen", "cocina"),
    ("knee", "rodilla"),
    ("knew", "sabía"),
    ("knock", "golpe"),
    ("know", "saber"),
    ("known", "conocido"),
    ("lady", "dama"),
    ("land", "tierra"),
    ("large", "gran"),
    ("last", "último"),
    ("late", "tarde"),
    ("laugh", "risa"),
    ("lay", "laico"),
    ("lead", "dirigir"),
    ("lean", "apoyarse"),
    ("learn", "aprender"),
    ("least", "menos"),
    ("leave", "salir"),
    ("led", "LED"),
    ("left", "izquierda"),
    ("leg", "pierna"),
    ("less", "Menos"),
    ("let", "dejar"),
    ("letter", "carta"),
    ("lie", "mentira"),
    ("life", "vida"),
    ("lift", "ascensor"),
    ("light", "ligero"),
    ("like", "me gusta"),
    ("line", "línea"),
    ("lip", "labio"),
    ("listen", "escucha"),
    ("little", "pequeńo"),
    ("live", "vivir"),
    ("lock", "bloquear"),
    ("locker", "armario"),
    ("long", "largo"),
    ("look", "Mira"),
    ("lose", "perder"),
    ("lost", "perdió"),
    ("lot", "mucho"),
    ("loud", "ruidoso"),
    ("love", "amor"),
    ("low", "bajo"),
    ("lunch", "almuerzo"),
    ("mad", "enojado"),
    ("made", "hecho"),
    ("make", "hacer"),
    ("man", "hombre"),
    ("manage", "gestionar"),
    ("many", "muchos"),
    ("mark", "marca"),
    ("marry", "casarse"),
    ("match", "partido"),
    ("matter", "importar"),
    ("may", "mayo"),
    ("maybe", "tal vez"),
    ("me", "yo"),
    ("mean", "media"),
    ("meant", "significaba"),
    ("meet", "reunirse"),
    ("memory", "memoria"),
    ("men", "hombres"),
    ("mention", "mención"),
    ("met", "reunió"),
    ("middle", "medio"),
    ("might", "podría"),
    ("mind", "mente"),
    ("mine", "mía"),
    ("minute", "minuto"),
    ("mirror", "espejo"),
    ("miss", "perder"),
    ("mom", "mamá"),
    ("moment", "momento"),
    ("money", "dinero"),
    ("month", "mes"),
    ("mood", "estado animico"),
    ("more", "Más"),
    ("morning", "Mańana"),
    ("most", "más"),
    ("mother", "madre"),
    ("mouth", "boca"),
    ("move", "movimiento"),
    ("movie", "película"),
    ("Mr.", "seńor."),
    ("Mrs.", "Seńora."),
    ("much", "mucho"),
    ("mum", "mamá"),
    ("mumble", "mascullar"),
    ("music", "música"),
    ("must", "debe"),
    ("mutter", "murmurar"),
    ("my", "mi"),
    ("myself", "mí mismo"),
    ("name", "nombre"),
    ("near", "cerca"),
    ("nearly", "casi"),
    ("neck", "cuello"),
    ("need", "necesitar"),
    ("nervous", "nervioso"),
    ("never", "Nunca"),
    ("new", "nuevo"),
    ("next", "siguiente"),
    ("nice", "agradable"),
    ("night", "noche"),
    ("no", "no"),
    ("nod", "asentir"),
    ("noise", "ruido"),
    ("none", "ninguna"),
    ("normal", "normal"),
    ("nose", "nariz"),
    ("not", "no"),
    ("note", "Nota"),
    ("nothing", "nada"),
    ("notice", "darse cuenta"),
    ("now", "ahora"),
    ("number", "número"),
    ("obviously", "obviamente"),
    ("of", "de"),
    ("off", "apagado"),
    ("offer", "oferta"),
    ("office", "oficina"),
    ("often", "a menudo"),
    ("oh", "Oh"),
    ("okay", "bueno"),
    ("old", "antiguo"),
    ("on", "en"),
    ("once", "una vez"),
    ("one", "uno"),
    ("only", "solamente"),
    ("onto", "sobre"),
    ("open", "abierto"),
    ("or", "o"),
    ("order", "orden"),
    ("other", "otro"),
    ("our", "nuestra"),
    ("out", "fuera"),
    ("outside", "fuera de"),
    ("over", "encima"),
    ("own", "propio"),
    ("pack", "paquete"),
    ("pain", "dolor"),
    ("paint", "pintura"),
    ("pair", "par"),
    ("pants", "pantalones"),
    ("paper", "papel"),
    ("parents", "padres"),
    ("park", "parque"),
    ("part", "parte"),
    ("party", "fiesta"),
    ("pass", "pasar"),
    ("past", "pasado"),
    ("pause", "pausa"),
    ("pay", "paga"),
    ("people", "gente"),
    ("perfect", "Perfecto"),
    ("perhaps", "quizás"),
    ("person", "persona"),
    ("phone", "teléfono"),
    ("pick", "recoger"),
    ("picture", "imagen"),
    ("piece", "pieza"),
    ("pink", "rosado"),
    ("piss", "mear"),
    ("place", "lugar"),
    ("plan", "plan"),
    ("play", "jugar"),
    ("please", "Por favor"),
    ("pocket", "bolsillo"),
    ("point", "punto"),
    ("police", "policía"),
    ("pop", "popular"),
    ("position", "posición"),
    ("possible", "posible"),
    ("power", "poder"),
    ("practically", "prácticamente"),
    ("present", "presente"),
    ("press", "prensa"),
    ("pretend", "fingir"),
    ("pretty", "bonita"),
    ("probably", "probablemente"),
    ("problem", "problema"),
    ("promise", "promesa"),
    ("pull", "Halar"),
    ("punch", "puńetazo"),
    ("push", "empujar"),
    ("put", "poner"),
    ("question", "pregunta"),
    ("quick", "rápido"),
    ("quickly", "con rapidez"),
    ("quiet", "tranquilo"),
    ("quietly", "tranquilamente"),
    ("quite", "bastante"),
    ("race", "carrera"),
    ("rain", "lluvia"),
    ("raise", "aumento"),
    ("ran", "corrió"),
    ("rang", "sonó"),
    ("rather", "más bien"),
    ("reach", "alcanzar"),
    ("read", "leer"),
    ("ready", "Listo"),
    ("real", "real"),
    ("realize", "darse cuenta de"),
    ("really", "De Verdad"),
    ("reason", "razón"),
    ("recognize", "reconocer"),
    ("red", "rojo"),
    ("relationship", "relación"),
    ("relax", "relajarse"),
    ("remain", "permanecer"),
    ("remember", "recuerda"),
    ("remind", "recordar"),
    ("repeat", "repetir"),
    ("reply", "respuesta"),
    ("respond", "responder"),
    ("rest", "descanso"),
    ("return", "regreso"),
    ("ride", "paseo"),
    ("right", "derecho"),
    ("ring", "anillo"),
    ("road", "la carretera"),
    ("rock", "rock"),
    ("roll", "rodar"),
    ("room", "habitación"),
    ("rose", "Rosa"),
    ("round", "redondo"),
    ("rub", "frotar"),
    ("run", "correr"),
    ("rush", "prisa"),
    ("sad", "triste"),
    ("safe", "seguro"),
    ("said", "dijo"),
    ("same", "mismo"),
    ("sat", "sábado"),
    ("save", "salvar"),
    ("saw", "Sierra"),
    ("say", "decir"),
    ("scare", "susto"),
    ("school", "colegio"),
    ("scream", "gritar"),
    ("search", "buscar"),
    ("seat", "asiento"),
    ("second", "segundo"),
    ("see", "ver"),
    ("seem", "parecer"),
    ("seen", "visto"),
    ("self", "yo"),
    ("send", "enviar"),
    ("sense", "sentido"),
    ("sent", "expedido"),
    ("serious", "grave"),
    ("seriously", "seriamente"),
    ("set", "conjunto"),
    ("settle", "resolver"),
    ("seven", "siete"),
    ("several", "varios"),
    ("shadow", "sombra"),
    ("shake", "sacudir"),
    ("share", "compartir"),
    ("she", "ella"),
    ("she'd", "cobertizo"),
    ("she's", "ella es"),
    ("shift", "cambio"),
    ("shirt", "camisa"),
    ("shit", "mierda"),
    ("shock", "choque"),
    ("shoe", "zapato"),
    ("shook", "sacudió"),
    ("shop", "tienda"),
    ("short", "corto"),
    ("shot", "Disparo"),
    ("should", "debería"),
    ("shoulder", "hombro"),
    ("shouldn't", "no debería"),
    ("shout", "gritar"),
    ("shove", "empujón"),
    ("show", "espectáculo"),
    ("shower", "ducha"),
    ("shrug", "encogimiento de hombros"),
    ("shut", "cerrar"),
    ("sick", "enfermos"),
    ("side", "lado"),
    ("sigh", "suspiro"),
    ("sight", "visión"),
    ("sign", "firmar"),
    ("silence", "silencio"),
    ("silent", "silencio"),
    ("simply", "simplemente"),
    ("since", "ya que"),
    ("single", "soltero"),
    ("sir", "seńor"),
    ("sister", "hermana"),
    ("sit", "sentar"),
    ("situation", "situación"),
    ("six", "seis"),
    ("skin", "piel"),
    ("sky", "cielo"),
    ("slam", "golpe"),
    ("sleep", "dormir"),
    ("slightly", "ligeramente"),
    ("slip", "resbalón"),
    ("slow", "lento"),
    ("slowly", "despacio"),
    ("small", "pequeńa"),
    ("smell", "olor"),
    ("smile", "sonreír"),
    ("smirk", "sonrisa afectada"),
    ("smoke", "fumar"),
    ("snap", "chasquido"),
    ("so", "asi que"),
    ("soft", "suave"),
    ("softly", "suavemente"),
    ("some", "algunos"),
    ("somehow", "de algun modo"),
    ("someone", "alguien"),
    ("something", "alguna cosa"),
    ("sometimes", "a veces"),
    ("somewhere", "algun lado"),
    ("son", "hijo"),
    ("song", "canción"),
    ("soon", "pronto"),
    ("sorry", "lo siento"),
    ("sort", "ordenar"),
    ("sound", "sonar"),
    ("space", "espacio"),
    ("speak", "hablar"),
    ("spend", "gastar"),
    ("spent", "gastado"),
    ("spoke", "habló"),
    ("spot", "lugar"),
    ("stair", "escalera"),
    ("stand", "estar"),
    ("star", "estrella"),
    ("stare", "mirar fijamente"),
    ("start", "comienzo"),
    ("state", "estado"),
    ("stay", "permanecer"),
    ("step", "paso"),
    ("stick", "palo"),
    ("still", "todavía"),
    ("stomach", "estómago"),
    ("stood", "destacado"),
    ("stop", "detener"),
    ("store", "almacenar"),
    ("story", "historia"),
    ("straight", "Derecho"),
    ("strange", "extrańo"),
    ("street", "calle"),
    ("strong", "fuerte"),
    ("struggle", "lucha"),
    ("stuck", "atascado"),
    ("student", "estudiante"),
    ("study", "estudiar"),
    ("stuff", "cosas"),
    ("stupid", "estúpido"),
    ("such", "tal"),
    ("suck", "chupar"),
    ("sudden", "repentino"),
    ("suddenly", "repentinamente"),
    ("suggest", "sugerir"),
    ("summer", "el verano"),
    ("sun", "sol"),
    ("suppose", "suponer"),
    ("sure", "Por supuesto"),
    ("surprise", "sorpresa"),
    ("surround", "rodear"),
    ("sweet", "dulce"),
    ("table", "mesa"),
    ("take", "tomar"),
    ("taken", "tomado"),
    ("talk", "hablar"),
    ("tall", "alto"),
    ("teacher", "profesor"),
    ("team", "equipo"),
    ("tear", "lágrima"),
    ("teeth", "dientes"),
    ("tell", "contar"),
    ("ten", "diez"),
    ("than", "que"),
    ("thank", "gracias"),
    ("that", "ese"),
    ("that's", "eso es"),
    ("the", "el"),
    ("their", "su"),
    ("them", "ellos"),
    ("themselves", "sí mismos"),
    ("then", "luego"),
    ("there", "ahí"),
    ("there's", "hay"),
    ("these", "estas"),
    ("they", "ellos"),
    ("they'd", "Habían"),
    ("they're", "ellos son"),
    ("thick", "grueso"),
    ("thing", "cosa"),
    ("think", "pensar"),
    ("third", "tercero"),
    ("this", "esta"),
    ("those", "aquellos"),
    ("though", "aunque"),
    ("thought", "pensamiento"),
    ("three", "Tres"),
    ("threw", "arrojó"),
    ("throat", "garganta"),
    ("through", "mediante"),
    ("throw", "lanzar"),
    ("tie", "Corbata"),
    ("tight", "ajustado"),
    ("time", "hora"),
    ("tiny", "minúsculo"),
    ("tire", "neumático"),
    ("to", "a"),
    ("today", "hoy"),
    ("together", "juntos"),
    ("told", "dicho"),
    ("tomorrow", "mańana"),
    ("tone", "tono"),
    ("tongue", "lengua"),
    ("tonight", "esta noche"),
    ("too", "también"),
    ("took", "tomó"),
    ("top", "parte superior"),
    ("totally", "totalmente"),
    ("touch", "toque"),
    ("toward", "hacia"),
    ("town", "pueblo"),
    ("track", "pista"),
    ("trail", "sendero"),
    ("train", "tren"),
    ("tree", "árbol"),
    ("trip", "viaje"),
    ("trouble", "problema"),
    ("trust", "confianza"),
    ("truth", "verdad"),
    ("try", "tratar"),
    ("turn", "giro"),
    ("TV", "televisión"),
    ("twenty", "veinte"),
    ("two", "dos"),
    ("type", "tipo"),
    ("uncle", "tío"),
    ("under", "debajo"),
    ("understand", "entender"),
    ("until", "hasta"),
    ("up", "arriba"),
    ("upon", "sobre"),
    ("us", "nos"),
    ("use", "utilizar"),
    ("usual", "usual"),
    ("usually", "generalmente"),
    ("very", "muy"),
    ("visit", "visitar"),
    ("voice", "voz"),
    ("wait", "Espere"),
    ("wake", "despertar"),
    ("walk", "caminar"),
    ("wall", "pared"),
    ("want", "querer"),
    ("warm", "calentar"),
    ("warn", "advertir"),
    ("was", "estaba"),
    ("wasn't", "no era"),
    ("watch", "reloj"),
    ("water", "agua"),
    ("wave", "ola"),
    ("way", "camino"),
    ("we", "nosotros"),
    ("we'll", "bien"),
    ("we're", "fueron"),
    ("we've", "nos hemos"),
    ("wear", "vestir"),
    ("week", "semana"),
    ("weird", "extrańos"),
    ("well", "bien"),
    ("went", "fuimos"),
    ("were", "fueron"),
    ("weren't", "no eran"),
    ("wet", "mojado"),
    ("what", "qué"),
    ("what's", "lo que es"),
    ("whatever", "lo que sea"),
    ("when", "cuando"),
    ("where", "dónde"),
    ("whether", "si"),
    ("which", "cual"),
    ("while", "mientras"),
    ("whisper", "susurro"),
    ("white", "blanco"),
    ("who", "quien"),
    ("whole", "todo"),
    ("why", "por qué"),
    ("wide", "amplio"),
    ("wife", "esposa"),
    ("will", "será"),
    ("wind", "viento"),
    ("window", "ventana"),
    ("wipe", "limpiar"),
    ("wish", "deseo"),
    ("with", "con"),
    ("within", "dentro"),
    ("without", "sin"),
    ("woke", "despertó"),
    ("woman", "mujer"),
    ("women", "mujer"),
    ("won't", "costumbre"),
    ("wonder", "preguntarse"),
    ("wood", "madera"),
    ("word", "palabra"),
    ("wore", "llevaba"),
    ("work", "trabajo"),
    ("world", "mundo"),
    ("worry", "preocupación"),
    ("worse", "peor"),
    ("would", "haría"),
    ("wouldn't", "no lo haría"),
    ("wow", "Guau"),
    ("wrap", "envolver"),
    ("write", "escribir"),
    ("wrong", "incorrecto"),
    ("yeah", "sí"),
    ("year", "ańo"),
    ("yell", "grito"),
    ("yes", "sí"),
    ("yet", "todavía"),
    ("you", "tú"),
    ("you'd", "Más te"),
    ("you'll", "Así,"),
    ("you're", "estás"),
    ("you've", "tienes"),
    ("young", "joven"),
    ("your", "tu"),
    ("yourself", "tú mismo"),
];
